use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};

#[derive(Debug, Display, Error)]
pub enum UserError {
    UrlNotFound,
    Forbidden,
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        // The platform only looks at the status code, never at a body.
        web::HttpResponse::build(self.status_code()).finish()
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
            UserError::Forbidden => http::StatusCode::FORBIDDEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntex::web::error::WebResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            UserError::UrlNotFound.status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            UserError::Forbidden.status_code(),
            http::StatusCode::FORBIDDEN
        );
    }
}

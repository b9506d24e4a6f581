use actix_web::{http::StatusCode, HttpResponse};
use leadflow_api_structs::dtos::ErrorResponseDTO;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadflowError {
    #[error("Internal server error")]
    InternalError,
    #[error("{0}")]
    BadClientData(String),
}

impl actix_web::error::ResponseError for LeadflowError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponseDTO::new(self.to_string()))
    }
}

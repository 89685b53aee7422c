use actix_web::error::{ErrorBadRequest, ErrorInternalServerError, ErrorNotFound};
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

#[derive(Serialize)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn into_response(self, status: &str, code: u32, message: &str) -> JsonResponse<T> {
        JsonResponse {
            status: status.to_string(),
            message: message.to_string(),
            code,
            item: self.item,
            list: self.list,
        }
    }

    fn error_body(self, code: u32, message: &str) -> String {
        let response = self.into_response("Error", code, message);
        serde_json::to_string(&response).unwrap_or_else(|_| message.to_string())
    }

    pub fn ok(self, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(self.into_response("OK", 200, message))
    }

    pub fn bad_request(self, message: impl ToString) -> Error {
        ErrorBadRequest(self.error_body(400, &message.to_string()))
    }

    pub fn form_error(self, message: impl ToString) -> Error {
        self.bad_request(message)
    }

    pub fn not_found(self, message: impl ToString) -> Error {
        ErrorNotFound(self.error_body(404, &message.to_string()))
    }

    pub fn internal_server_error(self, message: impl ToString) -> Error {
        ErrorInternalServerError(self.error_body(500, &message.to_string()))
    }
}

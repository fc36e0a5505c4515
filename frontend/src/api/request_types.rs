use reqwest::Method;

use super::{
    client::{expect_body, ApiClient},
    types::{ApiError, CreateRequestType, RequestType},
};

impl ApiClient {
    pub async fn list_request_types(&self) -> Result<Vec<RequestType>, ApiError> {
        self.get_list("tipos-solicitud").await
    }

    pub async fn create_request_type(
        &self,
        request: &CreateRequestType,
    ) -> Result<RequestType, ApiError> {
        expect_body(
            self.send_json(Method::POST, "tipos-solicitud", request)
                .await?,
            "tipos-solicitud",
        )
    }
}

use super::*;

impl TwitApiClient {
    /// Live stream information. `GET /streams`
    pub async fn list_streams(&self, params: &[(&str, &str)]) -> ApiResponse {
        self.execute(ApiRequest::new("/streams", params)).await
    }
}

use super::*;

impl TwitApiClient {
    /// Hosts and guests. `GET /people`
    pub async fn list_people(&self, params: &[(&str, &str)]) -> ApiResponse {
        self.execute(ApiRequest::new("/people", params)).await
    }
}

use super::*;

impl TwitApiClient {
    /// List shows. `GET /shows`
    pub async fn list_shows(&self, params: &[(&str, &str)]) -> ApiResponse {
        self.execute(ApiRequest::new("/shows", params)).await
    }

    /// Get a single show by ID. `GET /shows/{id}`
    ///
    /// The response carries the show as an object under `shows`;
    /// see [`ShowDetail`].
    pub async fn get_show(&self, id: &str, params: &[(&str, &str)]) -> ApiResponse {
        self.execute(ApiRequest::item("/shows", id, params)).await
    }
}

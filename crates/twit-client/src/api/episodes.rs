use super::*;

impl TwitApiClient {
    /// List episodes. `GET /episodes`
    pub async fn list_episodes(&self, params: &[(&str, &str)]) -> ApiResponse {
        self.execute(ApiRequest::new("/episodes", params)).await
    }

    /// Get a single episode by ID. `GET /episodes/{id}`
    pub async fn get_episode(&self, id: &str, params: &[(&str, &str)]) -> ApiResponse {
        self.execute(ApiRequest::item("/episodes", id, params)).await
    }
}

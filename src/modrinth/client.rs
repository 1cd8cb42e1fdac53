use crate::config::Settings;
use crate::error::{Result, UpdaterError};
use crate::repository::{Release, ReleaseCatalog};
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use url::Url;

/// Modrinth API client
pub struct ModrinthClient {
    client: Client,
    base: Url,
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct GameVersionsPatch<'a> {
    game_versions: &'a [String],
}

impl ModrinthClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Self::build_client(settings)?;

        Ok(Self {
            client,
            base: settings.api_base.clone(),
            verbose: settings.verbose,
        })
    }

    fn build_client(settings: &Settings) -> Result<Client> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.token))
            .map_err(|_| UpdaterError::Http("token contains invalid header characters".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(UpdaterError::from)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| UpdaterError::InvalidApiBase(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn check_status(&self, response: Response, url: &Url) -> Result<Response> {
        let status = response.status();
        if self.verbose {
            eprintln!("[VERBOSE] HTTP {}: {}", status, url);
        }

        if status.is_success() {
            Ok(response)
        } else {
            Err(UpdaterError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }

    /// Fetch every release of a project, `GET /project/{slug}/version`.
    pub fn fetch_project_versions(&self, slug: &str) -> Result<Vec<Release>> {
        let url = self.endpoint(&["project", slug, "version"])?;

        if self.verbose {
            eprintln!("[VERBOSE] Fetching: {}", url);
        }

        let response = self.client.get(url.clone()).send()?;
        let response = self.check_status(response, &url)?;

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| UpdaterError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Replace the game versions of one release, `PATCH /version/{id}`.
    pub fn patch_game_versions(&self, version_id: &str, game_versions: &[String]) -> Result<()> {
        let url = self.endpoint(&["version", version_id])?;

        if self.verbose {
            eprintln!("[VERBOSE] Patching: {}", url);
        }

        let response = self
            .client
            .patch(url.clone())
            .json(&GameVersionsPatch { game_versions })
            .send()?;
        self.check_status(response, &url)?;
        Ok(())
    }
}

impl ReleaseCatalog for ModrinthClient {
    fn list_releases(&self, slug: &str) -> Result<Vec<Release>> {
        self.fetch_project_versions(slug)
    }

    fn patch_release(&self, release_id: &str, game_versions: &[String]) -> Result<()> {
        self.patch_game_versions(release_id, game_versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> ModrinthClient {
        let settings = Settings::new(&server.url(), Some("test-token".into())).unwrap();
        ModrinthClient::new(&settings).unwrap()
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let settings = Settings::new("https://api.modrinth.com/v2", Some("t".into())).unwrap();
        let client = ModrinthClient::new(&settings).unwrap();
        let url = client.endpoint(&["project", "sodium", "version"]).unwrap();
        assert_eq!(url.as_str(), "https://api.modrinth.com/v2/project/sodium/version");
    }

    #[test]
    fn endpoint_escapes_segments() {
        let settings = Settings::new("https://api.modrinth.com/v2/", Some("t".into())).unwrap();
        let client = ModrinthClient::new(&settings).unwrap();
        let url = client.endpoint(&["version", "a/b"]).unwrap();
        assert_eq!(url.as_str(), "https://api.modrinth.com/v2/version/a%2Fb");
    }

    #[test]
    fn lists_releases_with_auth_headers() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/project/modA/version")
            .match_header("authorization", "Bearer test-token")
            .match_header("user-agent", Matcher::Regex("^AutomatedVersionUpdater/".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": "v1", "name": "A 1.0.0", "version_number": "1.0.0", "game_versions": ["1.19.4"]},
                    {"id": "v2", "name": "A 1.1.0", "version_number": "1.1.0", "game_versions": ["1.20.1"]}
                ]"#,
            )
            .create();

        let releases = client_for(&server).list_releases("modA").unwrap();

        mock.assert();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].id, "v1");
        assert_eq!(releases[1].game_versions, vec!["1.20.1"]);
    }

    #[test]
    fn list_reports_http_status() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/project/missing/version")
            .with_status(404)
            .create();

        let err = client_for(&server).list_releases("missing").unwrap_err();
        assert!(matches!(err, UpdaterError::Status { status: 404, .. }));
    }

    #[test]
    fn list_rejects_release_without_required_fields() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/project/modA/version")
            .with_status(200)
            .with_body(r#"[{"id": "v1", "name": "A"}]"#)
            .create();

        let err = client_for(&server).list_releases("modA").unwrap_err();
        assert!(matches!(err, UpdaterError::Decode { .. }));
    }

    #[test]
    fn patch_sends_full_game_version_list() {
        let mut server = Server::new();
        let mock = server
            .mock("PATCH", "/version/v1")
            .match_header("authorization", "Bearer test-token")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "game_versions": ["1.19.4", "1.20.1"]
            })))
            .with_status(204)
            .create();

        let versions = vec!["1.19.4".to_string(), "1.20.1".to_string()];
        client_for(&server).patch_release("v1", &versions).unwrap();
        mock.assert();
    }

    #[test]
    fn patch_failure_is_an_error() {
        let mut server = Server::new();
        let mock = server
            .mock("PATCH", "/version/v1")
            .with_status(401)
            .expect(1)
            .create();

        let err = client_for(&server)
            .patch_release("v1", &["1.20.1".to_string()])
            .unwrap_err();
        assert!(matches!(err, UpdaterError::Status { status: 401, .. }));
        mock.assert();
    }
}

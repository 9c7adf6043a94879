//! Host group and template lookups by exact name

use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::config::api;
use crate::error::Result;

use super::{Session, ZabbixClient};

/// Host group as returned by `hostgroup.get`
#[derive(Deserialize, Debug, Clone)]
pub struct HostGroup {
    pub groupid: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Template as returned by `template.get`
#[derive(Deserialize, Debug, Clone)]
pub struct Template {
    pub templateid: String,
    /// Technical template name
    #[serde(default)]
    pub host: Option<String>,
}

impl ZabbixClient {
    /// Host groups whose name equals `name` exactly
    pub async fn get_host_groups_by_name(
        &self,
        session: &Session,
        name: &str,
    ) -> Result<Vec<HostGroup>> {
        debug!("Looking up host group '{}'", name);
        let params = json!({
            "output": ["groupid", "name"],
            "filter": {"name": [name]},
        });
        self.call_as(api::METHOD_HOSTGROUP_GET, params, Some(session))
            .await
    }

    /// Templates whose technical name equals `name` exactly
    pub async fn get_templates_by_name(
        &self,
        session: &Session,
        name: &str,
    ) -> Result<Vec<Template>> {
        debug!("Looking up template '{}'", name);
        let params = json!({
            "output": ["templateid", "host"],
            "filter": {"host": [name]},
        });
        self.call_as(api::METHOD_TEMPLATE_GET, params, Some(session))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_host_groups_by_name() {
        let mock_server = MockServer::start().await;
        let client = ZabbixClient::test_client(&mock_server.uri());
        let session = Session::new("token".to_string());

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method": "hostgroup.get",
                "params": {"filter": {"name": ["Linux servers"]}},
                "auth": "token"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "result": [{"groupid": "2", "name": "Linux servers"}],
                "id": 1
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let groups = client
            .get_host_groups_by_name(&session, "Linux servers")
            .await
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].groupid, "2");
        assert_eq!(groups[0].name.as_deref(), Some("Linux servers"));
    }

    #[tokio::test]
    async fn test_get_templates_by_name_filters_on_host() {
        let mock_server = MockServer::start().await;
        let client = ZabbixClient::test_client(&mock_server.uri());
        let session = Session::new("token".to_string());

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method": "template.get",
                "params": {"filter": {"host": ["Template OS Linux"]}}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "result": [{"templateid": "10001"}],
                "id": 1
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let templates = client
            .get_templates_by_name(&session, "Template OS Linux")
            .await
            .unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].templateid, "10001");
        assert!(templates[0].host.is_none());
    }
}

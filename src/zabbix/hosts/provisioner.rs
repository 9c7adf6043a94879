//! Host creation

use log::{debug, info, warn};

use crate::config::api;
use crate::error::{Result, ZbxError};
use crate::zabbix::resolver::{NamePolicy, Resolver};
use crate::zabbix::{Session, ZabbixClient};

use super::models::{HostCreateParams, HostCreateResponse, HostCreationResult, HostRequest};

/// Creates hosts through an authenticated session
///
/// The provisioner owns the session for the whole run; resolution and
/// creation calls all reuse it.
pub struct Provisioner<'a> {
    client: &'a ZabbixClient,
    session: Session,
    name_policy: NamePolicy,
}

impl<'a> Provisioner<'a> {
    pub fn new(client: &'a ZabbixClient, session: Session) -> Self {
        Self {
            client,
            session,
            name_policy: NamePolicy::default(),
        }
    }

    /// Set how ambiguous group/template names are handled
    pub fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.client, &self.session, self.name_policy)
    }

    /// Create one host
    ///
    /// Group and template names that don't resolve are left out and reported
    /// in the result's warnings. Invalid input, API and transport failures
    /// are returned as errors.
    pub async fn create_host(&self, request: &HostRequest) -> Result<HostCreationResult> {
        let psk = request.validate()?;
        let hostname = request.hostname.trim();

        let resolver = self.resolver();
        let groups = resolver.resolve_groups(&request.groups).await?;
        let templates = resolver.resolve_templates(&request.templates).await?;

        let mut warnings = Vec::new();
        for name in &groups.missing {
            warn!("Host group '{}' not found, skipping it for '{}'", name, hostname);
            warnings.push(format!("Host group '{}' not found", name));
        }
        for name in &templates.missing {
            warn!("Template '{}' not found, skipping it for '{}'", name, hostname);
            warnings.push(format!("Template '{}' not found", name));
        }
        if groups.ids.is_empty() {
            warn!("Host '{}' has no resolved host groups", hostname);
        }

        debug!(
            "Creating host '{}' with {} group(s), {} template(s), psk={}",
            hostname,
            groups.ids.len(),
            templates.ids.len(),
            psk.is_some()
        );

        let params = HostCreateParams::new(request, groups.ids, templates.ids, psk);
        let response: HostCreateResponse = self
            .client
            .call_as(
                api::METHOD_HOST_CREATE,
                serde_json::to_value(&params)?,
                Some(&self.session),
            )
            .await?;

        let host_id = response.hostids.into_iter().next().ok_or_else(|| {
            ZbxError::Protocol(format!(
                "{} returned no host id for '{}'",
                api::METHOD_HOST_CREATE,
                hostname
            ))
        })?;

        info!("Created host '{}' (ID: {})", hostname, host_id);
        Ok(HostCreationResult::success(hostname, host_id, warnings))
    }
}

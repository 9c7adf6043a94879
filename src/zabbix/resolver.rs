//! Name to identifier resolution for host groups and templates
//!
//! Every name is looked up independently with its own remote call. A name
//! with no match is not an error: it is reported back as missing so the
//! caller can warn and carry on without it.

use log::{debug, warn};

use crate::error::{Result, ZbxError};

use super::{Session, ZabbixClient};

/// What to do when a name matches more than one remote object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Use the first match and log a warning
    #[default]
    FirstMatch,
    /// Fail with [`ZbxError::AmbiguousName`]
    Strict,
}

/// Outcome of resolving a list of names
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Resolution {
    /// Identifiers of the names that resolved, in input order
    pub ids: Vec<String>,
    /// Names that matched nothing
    pub missing: Vec<String>,
}

/// Resolves names through an authenticated session
pub struct Resolver<'a> {
    client: &'a ZabbixClient,
    session: &'a Session,
    policy: NamePolicy,
}

impl<'a> Resolver<'a> {
    pub fn new(client: &'a ZabbixClient, session: &'a Session, policy: NamePolicy) -> Self {
        Self {
            client,
            session,
            policy,
        }
    }

    /// Resolve a host group name to its `groupid`
    pub async fn resolve_group(&self, name: &str) -> Result<Option<String>> {
        let groups = self
            .client
            .get_host_groups_by_name(self.session, name)
            .await?;
        let ids = groups.into_iter().map(|g| g.groupid).collect();
        self.pick("Host group", name, ids)
    }

    /// Resolve a template name to its `templateid`
    pub async fn resolve_template(&self, name: &str) -> Result<Option<String>> {
        let templates = self
            .client
            .get_templates_by_name(self.session, name)
            .await?;
        let ids = templates.into_iter().map(|t| t.templateid).collect();
        self.pick("Template", name, ids)
    }

    /// Resolve every group name, collecting misses instead of failing
    pub async fn resolve_groups(&self, names: &[String]) -> Result<Resolution> {
        let mut resolution = Resolution::default();
        for name in names {
            match self.resolve_group(name).await? {
                Some(id) => resolution.ids.push(id),
                None => resolution.missing.push(name.clone()),
            }
        }
        Ok(resolution)
    }

    /// Resolve every template name, collecting misses instead of failing
    pub async fn resolve_templates(&self, names: &[String]) -> Result<Resolution> {
        let mut resolution = Resolution::default();
        for name in names {
            match self.resolve_template(name).await? {
                Some(id) => resolution.ids.push(id),
                None => resolution.missing.push(name.clone()),
            }
        }
        Ok(resolution)
    }

    fn pick(&self, kind: &'static str, name: &str, ids: Vec<String>) -> Result<Option<String>> {
        match ids.len() {
            0 => {
                debug!("{} '{}' not found", kind, name);
                Ok(None)
            }
            1 => Ok(ids.into_iter().next()),
            matches => match self.policy {
                NamePolicy::Strict => Err(ZbxError::AmbiguousName {
                    kind,
                    name: name.to_string(),
                    matches,
                }),
                NamePolicy::FirstMatch => {
                    warn!(
                        "{} name '{}' matches {} objects, using the first ({})",
                        kind, name, matches, ids[0]
                    );
                    Ok(ids.into_iter().next())
                }
            },
        }
    }
}

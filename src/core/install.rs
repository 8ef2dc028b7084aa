//! Install catalog: parsing, validation and platform recommendation.
//!
//! The catalog is static configuration (`assets/install.toml`), parsed once
//! per page load. Validation enforces that every OS has at most one primary
//! method, so [`select_primary`] never has to arbitrate between candidates.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use super::error::CatalogError;
use crate::models::{InstallMethod, Os, Target};

/// On-disk shape of the catalog file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(rename = "method", default)]
    methods: Vec<InstallMethod>,
}

/// Validated, ordered list of install methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallCatalog {
    methods: Vec<InstallMethod>,
}

impl InstallCatalog {
    /// Parse and validate a TOML catalog.
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.methods)
    }

    /// Validate an in-memory list of methods, keeping catalog order.
    pub fn new(methods: Vec<InstallMethod>) -> Result<Self, CatalogError> {
        validate(&methods)?;
        Ok(Self { methods })
    }

    pub fn methods(&self) -> &[InstallMethod] {
        &self.methods
    }

    pub fn select_primary(&self, os: Os) -> Option<&InstallMethod> {
        select_primary(&self.methods, os)
    }

    pub fn list_others(&self, primary: Option<&InstallMethod>) -> Vec<&InstallMethod> {
        list_others(&self.methods, primary)
    }
}

/// The recommended method for `os`: first entry targeting exactly that OS
/// with the primary flag set. `None` for [`Os::Unknown`].
pub fn select_primary(methods: &[InstallMethod], os: Os) -> Option<&InstallMethod> {
    methods.iter().find(|m| m.is_primary_for(os))
}

/// Every method except `primary`, in catalog order.
pub fn list_others<'a>(
    methods: &'a [InstallMethod],
    primary: Option<&InstallMethod>,
) -> Vec<&'a InstallMethod> {
    methods
        .iter()
        .filter(|m| primary.is_none_or(|p| p.id != m.id))
        .collect()
}

fn validate(methods: &[InstallMethod]) -> Result<(), CatalogError> {
    if methods.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut ids = HashSet::new();
    let mut primaries: HashMap<Os, &str> = HashMap::new();

    for (index, method) in methods.iter().enumerate() {
        if method.id.trim().is_empty() {
            return Err(CatalogError::EmptyField { index, field: "id" });
        }
        if method.name.trim().is_empty() {
            return Err(CatalogError::EmptyField { index, field: "name" });
        }
        if !ids.insert(method.id.as_str()) {
            return Err(CatalogError::DuplicateId(method.id.clone()));
        }
        if method.link_text.is_some() && method.link.is_none() {
            return Err(CatalogError::LinkTextWithoutLink(method.id.clone()));
        }

        if !method.primary {
            continue;
        }
        let Some(os) = method.os.os() else {
            debug_assert_eq!(method.os, Target::All);
            return Err(CatalogError::PrimaryForAll(method.id.clone()));
        };
        if let Some(first) = primaries.insert(os, &method.id) {
            return Err(CatalogError::MultiplePrimaries {
                os,
                first: first.to_string(),
                second: method.id.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        [[method]]
        id = "script-linux"
        name = "Install Script"
        os = "linux"
        primary = true
        code = "curl -sSfL https://chatuino.net/install | sh"

        [[method]]
        id = "binary-windows"
        name = "Pre-built Binary"
        os = "windows"
        primary = true
        link = "https://github.com/julez-dev/chatuino/releases"
        link_text = "Download from Releases"

        [[method]]
        id = "aur"
        name = "AUR (Arch Linux)"
        os = "linux"
        code = "yay -S chatuino-bin"

        [[method]]
        id = "go-install"
        name = "Go Install"
        os = "all"
        code = "go install github.com/julez-dev/chatuino@latest"
    "#;

    fn catalog() -> InstallCatalog {
        InstallCatalog::from_toml(CATALOG).expect("test catalog is valid")
    }

    fn ids(methods: &[&InstallMethod]) -> Vec<String> {
        methods.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_parse_fields() {
        let catalog = catalog();
        let windows = &catalog.methods()[1];
        assert_eq!(windows.os, Target::Windows);
        assert!(windows.primary);
        assert_eq!(windows.code, None);
        assert_eq!(windows.link_text.as_deref(), Some("Download from Releases"));
        assert!(!catalog.methods()[2].primary);
    }

    #[test]
    fn test_select_primary() {
        let catalog = catalog();
        assert_eq!(catalog.select_primary(Os::Linux).map(|m| m.id.as_str()), Some("script-linux"));
        assert_eq!(
            catalog.select_primary(Os::Windows).map(|m| m.id.as_str()),
            Some("binary-windows")
        );
        // No macOS primary in this catalog; "all" entries never qualify.
        assert_eq!(catalog.select_primary(Os::MacOs), None);
        assert_eq!(catalog.select_primary(Os::Unknown), None);
    }

    #[test]
    fn test_list_others_excludes_primary_and_keeps_order() {
        let catalog = catalog();
        for os in [Os::Linux, Os::MacOs, Os::Windows, Os::Unknown] {
            let primary = catalog.select_primary(os);
            let others = catalog.list_others(primary);

            let expected_len = catalog.methods().len() - usize::from(primary.is_some());
            assert_eq!(others.len(), expected_len);
            if let Some(primary) = primary {
                assert!(others.iter().all(|m| m.id != primary.id));
            }

            let order: Vec<usize> = others
                .iter()
                .map(|m| catalog.methods().iter().position(|c| c.id == m.id).unwrap())
                .collect();
            assert!(order.windows(2).all(|w| w[0] < w[1]));
        }

        let linux_primary = catalog.select_primary(Os::Linux);
        assert_eq!(
            ids(&catalog.list_others(linux_primary)),
            vec!["binary-windows", "aur", "go-install"]
        );
    }

    #[test]
    fn test_unknown_os_lists_full_catalog() {
        let catalog = catalog();
        let others = catalog.list_others(catalog.select_primary(Os::Unknown));
        assert_eq!(others.len(), catalog.methods().len());
    }

    #[test]
    fn test_rejects_multiple_primaries_for_one_os() {
        let source = format!(
            "{CATALOG}\n[[method]]\nid = \"snap\"\nname = \"Snap\"\nos = \"linux\"\nprimary = true\n"
        );
        assert_eq!(
            InstallCatalog::from_toml(&source),
            Err(CatalogError::MultiplePrimaries {
                os: Os::Linux,
                first: "script-linux".to_string(),
                second: "snap".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_primary_for_all() {
        let source = "[[method]]\nid = \"docker\"\nname = \"Docker\"\nos = \"all\"\nprimary = true\n";
        assert_eq!(
            InstallCatalog::from_toml(source),
            Err(CatalogError::PrimaryForAll("docker".to_string()))
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let source = format!("{CATALOG}\n[[method]]\nid = \"aur\"\nname = \"Again\"\nos = \"linux\"\n");
        assert_eq!(
            InstallCatalog::from_toml(&source),
            Err(CatalogError::DuplicateId("aur".to_string()))
        );
    }

    #[test]
    fn test_rejects_malformed_entries() {
        assert_eq!(InstallCatalog::from_toml(""), Err(CatalogError::Empty));
        assert_eq!(
            InstallCatalog::from_toml("[[method]]\nid = \"\"\nname = \"x\"\nos = \"linux\"\n"),
            Err(CatalogError::EmptyField { index: 0, field: "id" })
        );
        assert_eq!(
            InstallCatalog::from_toml(
                "[[method]]\nid = \"r\"\nname = \"Releases\"\nos = \"all\"\nlink_text = \"View\"\n"
            ),
            Err(CatalogError::LinkTextWithoutLink("r".to_string()))
        );
        assert!(matches!(
            InstallCatalog::from_toml("[[method]]\nid = \"x\"\nname = \"x\"\nos = \"beos\"\n"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            InstallCatalog::from_toml("[[method]]\nid = \"x\"\nname = \"x\"\nos = \"all\"\nurl = \"y\"\n"),
            Err(CatalogError::Parse(_))
        ));
    }
}

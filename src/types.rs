use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Hostname split into its public suffix components.
///
/// `domain`, `country` and `subdomain` are derived on demand from the stored
/// fields and never held separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Host {
    /// Hostname without trailing dot (`www.example.co.uk`)
    pub hostname: String,
    /// Label left of the suffix (`example`)
    pub organisation: String,
    /// Longest matching public suffix (`co.uk`)
    pub suffix: String,
    /// Right-most label (`uk`)
    pub tld: String,
}

impl Host {
    /// Create an unresolved host
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            hostname: name.into(),
            ..Default::default()
        }
    }

    /// Organisation and suffix (`example.co.uk`), empty unless both are known
    pub fn domain(&self) -> String {
        if self.organisation.is_empty() || self.suffix.is_empty() {
            return String::new();
        }
        format!("{}.{}", self.organisation, self.suffix)
    }

    /// Two-letter country code TLD (`uk`), empty for generic TLDs
    pub fn country(&self) -> String {
        if !self.suffix.is_empty() && self.tld.chars().count() == 2 {
            self.tld.clone()
        } else {
            String::new()
        }
    }

    /// Everything left of the domain (`www`)
    pub fn subdomain(&self) -> String {
        let domain = self.domain();
        if domain.is_empty() || domain == self.hostname {
            return String::new();
        }
        match self.hostname.find(&format!(".{}", domain)) {
            Some(pos) => self.hostname[..pos].to_string(),
            None => String::new(),
        }
    }

    /// Whether a suffix was found
    pub fn is_resolved(&self) -> bool {
        !self.suffix.is_empty()
    }

    /// Value of a single field
    pub fn field(&self, field: HostField) -> String {
        match field {
            HostField::Hostname => self.hostname.clone(),
            HostField::Organisation => self.organisation.clone(),
            HostField::Suffix => self.suffix.clone(),
            HostField::Subdomain => self.subdomain(),
            HostField::Domain => self.domain(),
            HostField::Tld => self.tld.clone(),
            HostField::Country => self.country(),
        }
    }
}

impl Serialize for Host {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Host", 7)?;
        state.serialize_field("hostname", &self.hostname)?;
        state.serialize_field("organisation", &self.organisation)?;
        state.serialize_field("suffix", &self.suffix)?;
        state.serialize_field("subdomain", &self.subdomain())?;
        state.serialize_field("domain", &self.domain())?;
        state.serialize_field("tld", &self.tld)?;
        state.serialize_field("country", &self.country())?;
        state.end()
    }
}

/// Host component selectable for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostField {
    Hostname,
    Organisation,
    Suffix,
    Subdomain,
    Domain,
    Tld,
    Country,
}

impl HostField {
    /// All fields, in display order
    pub const ALL: [HostField; 7] = [
        HostField::Hostname,
        HostField::Organisation,
        HostField::Suffix,
        HostField::Subdomain,
        HostField::Domain,
        HostField::Tld,
        HostField::Country,
    ];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            HostField::Hostname => "Hostname",
            HostField::Organisation => "Organisation",
            HostField::Suffix => "Suffix",
            HostField::Subdomain => "Subdomain",
            HostField::Domain => "Domain",
            HostField::Tld => "TLD",
            HostField::Country => "Country",
        }
    }
}

/// Join the selected fields with `/`
pub fn format_fields(host: &Host, fields: &[HostField]) -> String {
    fields
        .iter()
        .map(|&field| host.field(field))
        .collect::<Vec<_>>()
        .join("/")
}

// src/domain/contact/value_objects.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt, str::FromStr};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name regex must compile"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex must compile")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9]?[0-9\s().-]{10,15}$").expect("phone regex must compile")
});

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const MESSAGE_MAX_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// `label` is the human field name used in error messages ("First name").
    pub fn parse(label: &str, raw: &str) -> Result<Self, String> {
        let value = raw.trim();
        let chars = value.chars().count();
        if value.is_empty() {
            return Err(format!("{label} is required"));
        }
        if chars < NAME_MIN_CHARS {
            return Err(format!("{label} must be at least {NAME_MIN_CHARS} characters"));
        }
        if chars > NAME_MAX_CHARS {
            return Err(format!("{label} must be less than {NAME_MAX_CHARS} characters"));
        }
        if !NAME_PATTERN.is_match(value) {
            return Err(format!(
                "{label} can only contain letters, spaces, hyphens, and apostrophes"
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let value = raw.trim();
        if value.is_empty() {
            return Err("Email is required".into());
        }
        if value.chars().count() > EMAIL_MAX_CHARS {
            return Err(format!("Email must be less than {EMAIL_MAX_CHARS} characters"));
        }
        if !EMAIL_PATTERN.is_match(value) {
            return Err("Please enter a valid email address".into());
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let value = raw.trim();
        if value.is_empty() {
            return Err("Phone number is required".into());
        }
        if !PHONE_PATTERN.is_match(value) {
            return Err("Please enter a valid phone number".into());
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text note from the visitor. Only constructed for non-blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(raw: &str) -> Result<Option<Self>, String> {
        let value = raw.trim();
        if value.chars().count() > MESSAGE_MAX_CHARS {
            return Err(format!("Message must be less than {MESSAGE_MAX_CHARS} characters"));
        }
        if value.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self(value.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnualRevenue {
    Under100k,
    From100kTo500k,
    From500kTo1m,
    From1mTo5m,
    Over5m,
}

impl AnnualRevenue {
    pub const ALL: [Self; 5] = [
        Self::Under100k,
        Self::From100kTo500k,
        Self::From500kTo1m,
        Self::From1mTo5m,
        Self::Over5m,
    ];

    pub fn parse(raw: &str) -> Result<Self, String> {
        let value = raw.trim();
        if value.is_empty() {
            return Err("Please select your annual revenue range".into());
        }
        value
            .parse()
            .map_err(|()| "Please select a valid revenue range".to_string())
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Under100k => "under-100k",
            Self::From100kTo500k => "100k-500k",
            Self::From500kTo1m => "500k-1m",
            Self::From1mTo5m => "1m-5m",
            Self::Over5m => "over-5m",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under100k => "Under $100,000",
            Self::From100kTo500k => "$100,000 - $500,000",
            Self::From500kTo1m => "$500,000 - $1,000,000",
            Self::From1mTo5m => "$1,000,000 - $5,000,000",
            Self::Over5m => "Over $5,000,000",
        }
    }
}

impl FromStr for AnnualRevenue {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|r| r.code() == s).ok_or(())
    }
}

/// Service packages a visitor can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Essentials,
    GrowthStrategy,
    ExecutiveOperations,
    CompleteSupport,
    Consulting,
    Cleanup,
}

impl Service {
    pub const ALL: [Self; 6] = [
        Self::Essentials,
        Self::GrowthStrategy,
        Self::ExecutiveOperations,
        Self::CompleteSupport,
        Self::Consulting,
        Self::Cleanup,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Essentials => "essentials",
            Self::GrowthStrategy => "growth-strategy",
            Self::ExecutiveOperations => "executive-operations",
            Self::CompleteSupport => "complete-support",
            Self::Consulting => "consulting",
            Self::Cleanup => "cleanup",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Essentials => "Essentials Package",
            Self::GrowthStrategy => "Growth Strategy Package",
            Self::ExecutiveOperations => "Executive Operations Package",
            Self::CompleteSupport => "Complete Business Support",
            Self::Consulting => "Financial Consulting",
            Self::Cleanup => "QuickBooks Cleanup",
        }
    }

    /// CSS modifier for the service tag in the lead notification.
    pub const fn tag_class(self) -> &'static str {
        match self {
            Self::Essentials => "bookkeeping",
            Self::GrowthStrategy => "payroll",
            Self::ExecutiveOperations | Self::CompleteSupport | Self::Consulting => "consulting",
            Self::Cleanup => "cleanup",
        }
    }
}

impl FromStr for Service {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|svc| svc.code() == s).ok_or(())
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

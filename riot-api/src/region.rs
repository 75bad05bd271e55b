use std::fmt;
use std::str::FromStr;

use crate::types::RiotApiError;

/// Platform routing values accepted by the v3 endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    Ru,
    Kr,
    Br1,
    Oc1,
    Jp1,
    #[default]
    Na1,
    Eun1,
    Euw1,
    Tr1,
    La1,
    La2,
}

impl Platform {
    pub const ALL: [Platform; 11] = [
        Self::Ru,
        Self::Kr,
        Self::Br1,
        Self::Oc1,
        Self::Jp1,
        Self::Na1,
        Self::Eun1,
        Self::Euw1,
        Self::Tr1,
        Self::La1,
        Self::La2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::Kr => "kr",
            Self::Br1 => "br1",
            Self::Oc1 => "oc1",
            Self::Jp1 => "jp1",
            Self::Na1 => "na1",
            Self::Eun1 => "eun1",
            Self::Euw1 => "euw1",
            Self::Tr1 => "tr1",
            Self::La1 => "la1",
            Self::La2 => "la2",
        }
    }

    pub fn host(&self) -> String {
        format!("{}.api.riotgames.com", self.as_str())
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ru => "Russia",
            Self::Kr => "Korea",
            Self::Br1 => "Brazil",
            Self::Oc1 => "Oceania",
            Self::Jp1 => "Japan",
            Self::Na1 => "North America",
            Self::Eun1 => "EU Nordic & East",
            Self::Euw1 => "EU West",
            Self::Tr1 => "Turkey",
            Self::La1 => "Latin America North",
            Self::La2 => "Latin America South",
        }
    }
}

impl FromStr for Platform {
    type Err = RiotApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RU" => Ok(Self::Ru),
            "KR" => Ok(Self::Kr),
            "BR" | "BR1" => Ok(Self::Br1),
            "OCE" | "OC" | "OC1" => Ok(Self::Oc1),
            "JP" | "JP1" => Ok(Self::Jp1),
            "NA" | "NA1" => Ok(Self::Na1),
            "EUNE" | "EUN" | "EUN1" => Ok(Self::Eun1),
            "EUW" | "EUW1" => Ok(Self::Euw1),
            "TR" | "TR1" => Ok(Self::Tr1),
            "LAN" | "LA1" => Ok(Self::La1),
            "LAS" | "LA2" => Ok(Self::La2),
            _ => Err(RiotApiError::InvalidPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_north_america() {
        assert_eq!(Platform::default(), Platform::Na1);
        assert_eq!(Platform::default().host(), "na1.api.riotgames.com");
    }

    #[test]
    fn parses_subdomains_and_short_names() {
        assert_eq!("euw1".parse::<Platform>().unwrap(), Platform::Euw1);
        assert_eq!("EUNE".parse::<Platform>().unwrap(), Platform::Eun1);
        assert_eq!("oce".parse::<Platform>().unwrap(), Platform::Oc1);
        assert_eq!(" kr ".parse::<Platform>().unwrap(), Platform::Kr);

        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn rejects_unknown_platform() {
        let err = "mars".parse::<Platform>().unwrap_err();
        assert!(matches!(err, RiotApiError::InvalidPlatform(ref s) if s == "mars"));
    }

    #[test]
    fn display_is_upper_case_code() {
        assert_eq!(Platform::La2.to_string(), "LA2");
    }
}

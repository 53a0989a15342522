//! Offers
//!
//! A CPA offer another member posted: the engine lists them, filters
//! them by target country, and feeds one at a time into the click
//! workflow. Offers are deactivated rather than deleted in the normal
//! flow; only admin removal is a hard delete.

use kernel::id::{OfferId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Offer as the API reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub user_id: UserId,
    /// Posting member's display name
    pub username: String,
    pub title: String,
    pub link: String,
    /// CPA network the offer runs on
    pub network: String,
    /// Target country tags, e.g. "US, CA" or "Worldwide"
    pub countries: String,
    /// Reward per verified click
    #[serde(with = "rust_decimal::serde::float")]
    pub epc: Decimal,
    pub max_clicks_per_day: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Offer {
    /// Country filter as the offer list applies it
    ///
    /// "All" passes everything; an offer targeting "Worldwide" matches
    /// any filter; otherwise the filter tag must appear in the
    /// offer's country list.
    pub fn country_matches(&self, filter: &str) -> bool {
        filter == "All"
            || self.countries.contains("Worldwide")
            || self.countries.contains(filter)
    }
}

/// Form data for posting a new offer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOffer {
    pub title: String,
    pub link: String,
    pub network: String,
    pub countries: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub epc: Decimal,
    pub max_clicks_per_day: u32,
    pub description: String,
}

impl NewOffer {
    /// Validate the form the way the posting page does
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().len() < 5 {
            return Err("Title must be at least 5 characters".to_string());
        }
        if !is_http_url(&self.link) {
            return Err("Please enter a valid offer URL".to_string());
        }
        if self.network.trim().is_empty() {
            return Err("Please select a network".to_string());
        }
        if self.countries.trim().is_empty() {
            return Err("Please select at least one country".to_string());
        }
        if self.epc < Decimal::new(1, 2) {
            return Err("EPC must be greater than 0".to_string());
        }
        if self.max_clicks_per_day < 1 {
            return Err("Must allow at least 1 click per day".to_string());
        }
        Ok(())
    }
}

/// Form-level URL plausibility check
fn is_http_url(link: &str) -> bool {
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"));
    match rest {
        Some(host) => {
            let host = host.split('/').next().unwrap_or("");
            host.contains('.') && !host.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(countries: &str) -> Offer {
        Offer {
            id: OfferId::new(1),
            user_id: UserId::new(2),
            username: "CPAmaster".to_string(),
            title: "Crypto Wallet Signup".to_string(),
            link: "https://offers.example/crypto".to_string(),
            network: "MaxBounty".to_string(),
            countries: countries.to_string(),
            epc: Decimal::new(50, 2),
            max_clicks_per_day: 50,
            description: String::new(),
            active: true,
        }
    }

    fn valid_form() -> NewOffer {
        NewOffer {
            title: "Crypto Wallet Signup".to_string(),
            link: "https://offers.example/crypto".to_string(),
            network: "MaxBounty".to_string(),
            countries: "US, CA".to_string(),
            epc: Decimal::new(50, 2),
            max_clicks_per_day: 50,
            description: String::new(),
        }
    }

    #[test]
    fn test_country_matches() {
        let o = offer("US, CA");
        assert!(o.country_matches("All"));
        assert!(o.country_matches("US"));
        assert!(o.country_matches("CA"));
        assert!(!o.country_matches("UK"));

        let worldwide = offer("Worldwide");
        assert!(worldwide.country_matches("US"));
        assert!(worldwide.country_matches("All"));
    }

    #[test]
    fn test_new_offer_validation() {
        assert!(valid_form().validate().is_ok());

        let mut short_title = valid_form();
        short_title.title = "Ads".to_string();
        assert!(short_title.validate().is_err());

        let mut bad_link = valid_form();
        bad_link.link = "ftp://offers.example".to_string();
        assert!(bad_link.validate().is_err());

        let mut no_network = valid_form();
        no_network.network = "  ".to_string();
        assert!(no_network.validate().is_err());

        let mut zero_epc = valid_form();
        zero_epc.epc = Decimal::ZERO;
        assert_eq!(
            zero_epc.validate().unwrap_err(),
            "EPC must be greater than 0"
        );

        let mut zero_cap = valid_form();
        zero_cap.max_clicks_per_day = 0;
        assert!(zero_cap.validate().is_err());
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://offers.example/path?q=1"));
        assert!(is_http_url("http://a.b"));
        assert!(!is_http_url("offers.example"));
        assert!(!is_http_url("https://nodot"));
        assert!(!is_http_url("https://.leading"));
    }

    #[test]
    fn test_offer_wire_shape() {
        let json = r#"{
            "id": 3,
            "userId": 2,
            "username": "CPAmaster",
            "title": "Crypto Wallet Signup",
            "link": "https://offers.example/crypto",
            "network": "MaxBounty",
            "countries": "US",
            "epc": 0.5,
            "maxClicksPerDay": 50
        }"#;
        let o: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(o.epc, Decimal::new(5, 1));
        assert!(o.active, "active defaults to true");
        assert_eq!(o.description, "");
    }
}

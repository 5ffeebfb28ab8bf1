// Endpoints and fixed identifiers of the Marketplace API

/// Production domain
pub const DOMAIN: &str = "cdiscount.com";

/// Seller sandbox domain
pub const PREPROD_DOMAIN: &str = "preprod-cdiscount.com";

/// Public account giving read access to the whole catalogue
pub const ALL_DATA_LOGIN: &str = "AllData";
pub const ALL_DATA_PASSWORD: &str = "pa$$word";

/// Token lifetime announced by the security token service (48 hours)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 48 * 60 * 60;

pub const CONTENT_TYPE_XML: &str = "text/xml; charset=utf-8";
pub const SOAP_ACTION_HEADER: &str = "SOAPAction";

/// Marketplace API service endpoint for a domain
pub fn service_url(domain: &str) -> String {
    format!("https://wsvc.{}/MarketplaceAPIService.svc", domain)
}

/// Security token service endpoint for a domain, scoped to the service realm
pub fn token_url(domain: &str) -> String {
    format!(
        "https://sts.{}/users/httpIssue.svc/?realm={}",
        domain,
        service_url(domain)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_url() {
        assert_eq!(
            service_url(DOMAIN),
            "https://wsvc.cdiscount.com/MarketplaceAPIService.svc"
        );
    }

    #[test]
    fn test_token_url() {
        assert_eq!(
            token_url(PREPROD_DOMAIN),
            "https://sts.preprod-cdiscount.com/users/httpIssue.svc/?realm=https://wsvc.preprod-cdiscount.com/MarketplaceAPIService.svc"
        );
    }
}

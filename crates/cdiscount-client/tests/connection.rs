use cdiscount_client::{ClientConfig, ClientError, Connection};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SELLER_INFO: &str = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body>
<GetSellerInformationResponse xmlns="http://www.cdiscount.com">
<GetSellerInformationResult xmlns:i="http://www.w3.org/2001/XMLSchema-instance">
<ErrorList/><ErrorMessage i:nil="true"/><OperationSuccess>true</OperationSuccess>
<Seller><Email>seller@example.com</Email><Login>seller</Login></Seller>
</GetSellerInformationResult></GetSellerInformationResponse></s:Body></s:Envelope>"#;

const INVALID_TOKEN_FAULT: &str = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body>
<s:Fault><faultcode>s:Client</faultcode><faultstring>Invalid security token</faultstring></s:Fault>
</s:Body></s:Envelope>"#;

fn token_body(token: &str) -> String {
    format!(
        "<string xmlns=\"http://schemas.microsoft.com/2003/10/Serialization/\">{}</string>",
        token
    )
}

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new("seller", "secret")
        .with_service_url(&format!("{}/svc", server.uri()))
        .with_token_url(&format!("{}/sts", server.uri()))
}

async fn mount_token(server: &MockServer, login: &str, password: &str, token: &str) {
    Mock::given(method("GET"))
        .and(path("/sts"))
        .and(basic_auth(login, password))
        .respond_with(ResponseTemplate::new(200).set_body_string(token_body(token)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_connect_fetches_token() {
    let server = MockServer::start().await;
    mount_token(&server, "seller", "secret", "TOKEN-1").await;

    let connection = Connection::connect(config(&server)).await.unwrap();
    assert_eq!(connection.token().as_deref(), Some("TOKEN-1"));
    assert_eq!(
        connection.header().security.token_id.as_deref(),
        Some("TOKEN-1")
    );
}

#[tokio::test]
async fn test_connect_with_rejected_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sts"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = Connection::connect(config(&server)).await;
    assert!(matches!(result, Err(ClientError::Auth(_))));
}

#[tokio::test]
async fn test_connect_without_credentials() {
    let result = Connection::connect(ClientConfig::new("", "")).await;
    assert!(matches!(result, Err(ClientError::Connection(_))));
}

#[tokio::test]
async fn test_call_sends_soap_request() {
    let server = MockServer::start().await;
    mount_token(&server, "seller", "secret", "TOKEN-1").await;
    Mock::given(method("POST"))
        .and(path("/svc"))
        .and(header("content-type", "text/xml; charset=utf-8"))
        .and(header(
            "SOAPAction",
            "\"http://www.cdiscount.com/IMarketplaceAPIService/GetSellerInformation\"",
        ))
        .and(body_string_contains("<GetSellerInformation xmlns=\"http://www.cdiscount.com\">"))
        .and(body_string_contains("<a:TokenId>TOKEN-1</a:TokenId>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SELLER_INFO))
        .expect(1)
        .mount(&server)
        .await;

    let connection = Connection::connect(config(&server)).await.unwrap();
    let seller = connection.seller().get_seller_info().await.unwrap();
    assert_eq!(seller["Seller"]["Email"], "seller@example.com");
    assert_eq!(seller["OperationSuccess"], "true");
}

#[tokio::test]
async fn test_fault_refreshes_token_and_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(token_body("OLD")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_token(&server, "seller", "secret", "NEW").await;

    Mock::given(method("POST"))
        .and(body_string_contains("<a:TokenId>OLD</a:TokenId>"))
        .respond_with(ResponseTemplate::new(500).set_body_string(INVALID_TOKEN_FAULT))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("<a:TokenId>NEW</a:TokenId>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SELLER_INFO))
        .expect(1)
        .mount(&server)
        .await;

    let connection = Connection::connect(config(&server)).await.unwrap();
    let seller = connection.seller().get_seller_info().await.unwrap();
    assert_eq!(seller["Seller"]["Login"], "seller");
    assert_eq!(connection.token().as_deref(), Some("NEW"));
}

#[tokio::test]
async fn test_unauthorized_status_is_retried_once() {
    let server = MockServer::start().await;
    mount_token(&server, "seller", "secret", "TOKEN").await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(2)
        .mount(&server)
        .await;

    let connection = Connection::connect(config(&server)).await.unwrap();
    let result = connection.seller().get_seller_indicators().await;
    assert!(matches!(result, Err(ClientError::Http { status: 401, .. })));
}

#[tokio::test]
async fn test_http_error_is_not_retried() {
    let server = MockServer::start().await;
    mount_token(&server, "seller", "secret", "TOKEN").await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>unavailable</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let connection = Connection::connect(config(&server)).await.unwrap();
    match connection.seller().get_seller_info().await {
        Err(ClientError::Http { status, body }) => {
            assert_eq!(status, 503);
            assert!(body.contains("unavailable"));
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_operation_failure_is_an_error() {
    let server = MockServer::start().await;
    mount_token(&server, "seller", "secret", "TOKEN").await;
    let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body>
        <GetOfferPackageSubmissionResultResponse xmlns="http://www.cdiscount.com">
        <GetOfferPackageSubmissionResultResult>
        <ErrorList><Error><Message>Unknown package</Message></Error></ErrorList>
        <ErrorMessage>Unknown package</ErrorMessage>
        <OperationSuccess>false</OperationSuccess>
        </GetOfferPackageSubmissionResultResult></GetOfferPackageSubmissionResultResponse>
        </s:Body></s:Envelope>"#;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let connection = Connection::connect(config(&server)).await.unwrap();
    match connection
        .offers()
        .get_offer_package_submission_result(42)
        .await
    {
        Err(ClientError::Operation { message, errors }) => {
            assert_eq!(message, "Unknown package");
            assert_eq!(errors, json!({"Error": {"Message": "Unknown package"}}));
        }
        other => panic!("expected operation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_catalogue_calls_use_public_account() {
    let server = MockServer::start().await;
    mount_token(&server, "seller", "secret", "SELLER-TOKEN").await;
    mount_token(&server, "AllData", "pa$$word", "ALLDATA-TOKEN").await;

    let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body>
        <GetAllAllowedCategoryTreeResponse xmlns="http://www.cdiscount.com">
        <GetAllAllowedCategoryTreeResult><OperationSuccess>true</OperationSuccess>
        <CategoryTree><Name>Root</Name></CategoryTree>
        </GetAllAllowedCategoryTreeResult></GetAllAllowedCategoryTreeResponse>
        </s:Body></s:Envelope>"#;
    Mock::given(method("POST"))
        .and(body_string_contains("<a:TokenId>ALLDATA-TOKEN</a:TokenId>"))
        .and(body_string_contains("<GetAllAllowedCategoryTree"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let connection = Connection::connect(config(&server)).await.unwrap();
    let tree = connection
        .products()
        .get_all_allowed_category_tree()
        .await
        .unwrap();
    assert_eq!(tree["CategoryTree"]["Name"], "Root");
    assert_eq!(connection.token().as_deref(), Some("SELLER-TOKEN"));
}

#[tokio::test]
async fn test_expired_token_is_refreshed_before_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(token_body("OLD")))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(token_body("NEW")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("<a:TokenId>OLD</a:TokenId>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SELLER_INFO))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("<a:TokenId>NEW</a:TokenId>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SELLER_INFO))
        .expect(1)
        .mount(&server)
        .await;

    let connection = Connection::connect(config(&server).with_token_ttl(0))
        .await
        .unwrap();
    assert_eq!(connection.token().as_deref(), Some("OLD"));

    connection.seller().get_seller_info().await.unwrap();
    assert_eq!(connection.token().as_deref(), Some("NEW"));
}

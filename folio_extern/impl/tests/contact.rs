use std::{net::SocketAddr, path::Path};

use axum::{routing, Router};
use folio_config::DEFAULT_CONFIG_PATH;
use folio_demo::{CONTACT_MESSAGE, SENDER_NAME};
use folio_extern_contracts::contact::{
    ContactRelayApiService, ContactRelayResponse, ContactSubmission,
};
use folio_extern_impl::{
    contact::{ContactRelayApiServiceConfig, ContactRelayApiServiceImpl},
    http::HttpClient,
};
use folio_testing::{function, web3forms};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn web3forms_accepted() {
    let access_key = access_key();
    let (router, inbox) = web3forms::router(access_key.clone());
    let addr = folio_testing::spawn(router).await.unwrap();
    let sut = web3forms_sut(addr, access_key.clone());

    let result = sut.submit(&submission()).await.unwrap();

    assert_eq!(
        result,
        ContactRelayResponse::Accepted {
            message: Some("Email sent successfully!".into())
        }
    );
    let items = inbox.items().await;
    assert_eq!(items.len(), 1);
    let fields = items[0]
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        fields,
        [
            ("access_key", access_key.as_str()),
            ("email", "max.mustermann@example.de"),
            ("from_name", SENDER_NAME),
            ("message", "Hi! I would like to talk about a project."),
            ("name", "Max Mustermann"),
            ("replyto", "max.mustermann@example.de"),
            ("subject", "Project inquiry"),
        ]
    );
}

#[tokio::test]
async fn web3forms_rejected() {
    let (router, inbox) = web3forms::router(access_key());
    let addr = folio_testing::spawn(router).await.unwrap();
    let sut = web3forms_sut(addr, "wrong-access-key".into());

    let result = sut.submit(&submission()).await.unwrap();

    assert_eq!(
        result,
        ContactRelayResponse::Rejected {
            message: Some("Invalid access key".into())
        }
    );
    assert!(inbox.items().await.is_empty());
}

#[tokio::test]
async fn function_accepted() {
    let (router, inbox) = function::router(Some("secret".into()));
    let addr = folio_testing::spawn(router).await.unwrap();
    let sut = function_sut(addr, Some("secret".into()));

    let result = sut.submit(&submission()).await.unwrap();

    assert_eq!(
        result,
        ContactRelayResponse::Accepted {
            message: Some("Contact message received".into())
        }
    );
    let items = inbox.items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0],
        function::FunctionSubmission {
            body: serde_json::json!({
                "name": "Max Mustermann",
                "email": "max.mustermann@example.de",
                "subject": "Project inquiry",
                "message": "Hi! I would like to talk about a project.",
                "from_name": SENDER_NAME,
                "replyto": "max.mustermann@example.de",
            }),
            authorization: Some("Bearer secret".into()),
            apikey: Some("secret".into()),
        }
    );
}

#[tokio::test]
async fn function_without_api_key() {
    let (router, inbox) = function::router(None);
    let addr = folio_testing::spawn(router).await.unwrap();
    let sut = function_sut(addr, None);

    let result = sut.submit(&submission()).await.unwrap();

    assert!(result.is_accepted());
    let items = inbox.items().await;
    assert_eq!(items[0].authorization, None);
    assert_eq!(items[0].apikey, None);
}

#[tokio::test]
async fn error_status_is_an_error() {
    let (router, inbox) = function::router(Some("secret".into()));
    let addr = folio_testing::spawn(router).await.unwrap();
    let sut = function_sut(addr, Some("wrong".into()));

    let result = sut.submit(&submission()).await;

    assert!(result.is_err());
    assert!(inbox.items().await.is_empty());
}

#[tokio::test]
async fn invalid_response_is_an_error() {
    let router = Router::new().route(function::FUNCTION_ROUTE, routing::post(|| async { "OK" }));
    let addr = folio_testing::spawn(router).await.unwrap();
    let sut = function_sut(addr, None);

    let result = sut.submit(&submission()).await;

    assert!(result.is_err());
}

fn submission() -> ContactSubmission {
    ContactSubmission::new(CONTACT_MESSAGE.clone(), SENDER_NAME.into())
}

fn access_key() -> String {
    let config = folio_config::load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
    config.contact.web3forms.unwrap().access_key
}

fn web3forms_sut(addr: SocketAddr, access_key: String) -> ContactRelayApiServiceImpl {
    let config = ContactRelayApiServiceConfig::Web3Forms {
        endpoint: format!("http://{addr}{}", web3forms::SUBMIT_ROUTE)
            .parse()
            .unwrap(),
        access_key,
    };
    ContactRelayApiServiceImpl::new(config, HttpClient::new().unwrap())
}

fn function_sut(addr: SocketAddr, api_key: Option<String>) -> ContactRelayApiServiceImpl {
    let config = ContactRelayApiServiceConfig::Function {
        endpoint: format!("http://{addr}{}", function::FUNCTION_ROUTE)
            .parse()
            .unwrap(),
        api_key,
    };
    ContactRelayApiServiceImpl::new(config, HttpClient::new().unwrap())
}

use mockito::{Matcher, Server};
use numbers_client::{Axis, Error, NumbersClient};

#[tokio::test]
async fn test_fetch_row() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/numbers/A/row/0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Value":[1,2,3],"Cause":null,"Success":true}"#)
        .create_async()
        .await;

    let client = NumbersClient::new(server.url()).unwrap();
    let row = client.fetch_row("A", Axis::Row, 0).await.unwrap();

    assert_eq!(row, vec![1, 2, 3]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_row_column_axis() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/numbers/B/col/7")
        .with_status(200)
        .with_body(r#"{"Value":[-4,0,9],"Cause":null,"Success":true}"#)
        .create_async()
        .await;

    let client = NumbersClient::new(server.url()).unwrap();
    let row = client.fetch_row("B", Axis::Col, 7).await.unwrap();

    assert_eq!(row, vec![-4, 0, 9]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_row_non_success_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/numbers/A/row/0")
        .with_status(500)
        .create_async()
        .await;

    let client = NumbersClient::new(server.url()).unwrap();
    let result = client.fetch_row("A", Axis::Row, 0).await;

    match result {
        Err(Error::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_fetch_row_malformed_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/numbers/A/row/0")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = NumbersClient::new(server.url()).unwrap();
    let result = client.fetch_row("A", Axis::Row, 0).await;

    assert!(matches!(result, Err(Error::Deserialize(_))));
}

#[tokio::test]
async fn test_fetch_row_rejected_payload() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/numbers/A/row/3")
        .with_status(200)
        .with_body(r#"{"Value":[],"Cause":"index out of range","Success":false}"#)
        .create_async()
        .await;

    let client = NumbersClient::new(server.url()).unwrap();
    let result = client.fetch_row("A", Axis::Row, 3).await;

    match result {
        Err(Error::Rejected { index, cause }) => {
            assert_eq!(index, 3);
            assert_eq!(cause, "index out of range");
        }
        other => panic!("expected rejection, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_init() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/numbers/init/10")
        .with_status(200)
        .with_body("Dataset generated")
        .create_async()
        .await;

    let client = NumbersClient::new(server.url()).unwrap();
    let body = client.init(10).await.unwrap();

    assert_eq!(body, "Dataset generated");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_validate_sends_xml_envelope() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/numbers/validate")
        .match_header("content-type", "application/xml")
        .match_body(Matcher::Exact(
            "<string xmlns=\"http://schemas.microsoft.com/2003/10/Serialization/\">ABC123</string>"
                .to_string(),
        ))
        .with_status(200)
        .with_body("Alright!")
        .create_async()
        .await;

    let client = NumbersClient::new(server.url()).unwrap();
    let body = client.validate("ABC123").await.unwrap();

    assert_eq!(body, "Alright!");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/numbers/init/5")
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let client = NumbersClient::new(format!("{}/", server.url())).unwrap();
    let body = client.init(5).await.unwrap();

    assert_eq!(body, "ok");
    mock.assert_async().await;
}

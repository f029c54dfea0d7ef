use crate::config::SearchConfig;
use crate::filter::RequestPayload;
use crate::models::PropertyItem;
use crate::search::error::{Result, SearchError};
use crate::search::traits::PropertySource;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Property search over the remote `/property/list` endpoint
pub struct HttpPropertySource {
    client: Client,
    list_url: String,
}

impl HttpPropertySource {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            list_url: config.list_url(),
        })
    }
}

#[async_trait]
impl PropertySource for HttpPropertySource {
    async fn fetch(&self, payload: &RequestPayload) -> Result<Vec<PropertyItem>> {
        let query = payload.query_pairs();
        debug!(url = %self.list_url, ?query, "Requesting property list");

        let response = self.client.get(&self.list_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(%status, "Property list request failed");
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of listings", body.len());

        let items: Vec<PropertyItem> = serde_json::from_str(&body)?;
        Ok(items)
    }

    fn source_name(&self) -> &'static str {
        "property-list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CostRange, RequestPayload};
    use crate::models::{HouseType, Priority, TradeType};
    use crate::search::ResultRetriever;
    use axum::extract::RawQuery;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    async fn serve(router: Router) -> SearchConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        SearchConfig::new(format!("http://{}", addr))
    }

    fn payload() -> RequestPayload {
        RequestPayload {
            address: "Seoul Station".to_string(),
            travel_time: 20,
            house_type: vec![HouseType::Apartment, HouseType::Villa],
            trade_type: vec![TradeType::Sale, TradeType::LongTermRent],
            deposit: Some(CostRange { min: 0, max: 100_000_000 }),
            monthly: None,
            priority: Priority::Time,
        }
    }

    #[tokio::test]
    async fn sends_repeated_keys_and_parses_listings() {
        let seen = Arc::new(Mutex::new(None::<String>));
        let captured = seen.clone();
        let router = Router::new().route(
            "/property/list",
            get(move |RawQuery(query): RawQuery| {
                let captured = captured.clone();
                async move {
                    *captured.lock().unwrap() = query;
                    Json(json!([
                        {
                            "id": 1,
                            "tradeType": "SALE",
                            "houseType": "APARTMENT",
                            "price": 90000000,
                            "rentPrice": null,
                            "travelTime": 18,
                            "addressNumber": "중림동 1",
                            "floor": 5
                        },
                        {
                            "id": "2",
                            "tradeType": "LONG_TERM_RENT",
                            "houseType": "VILLA",
                            "price": 70000000,
                            "travelTime": 22,
                            "addressNumber": "만리동 2",
                            "floor": 3
                        }
                    ]))
                }
            }),
        );
        let source = HttpPropertySource::new(&serve(router).await).unwrap();

        let items = source.fetch(&payload()).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[1].trade_type, TradeType::LongTermRent);

        let query = seen.lock().unwrap().clone().unwrap();
        assert!(query.contains("address=Seoul+Station"));
        assert!(query.contains("houseType=APARTMENT&houseType=VILLA"));
        assert!(query.contains("tradeType=SALE&tradeType=LONG_TERM_RENT"));
        assert!(query.contains("depositMin=0&depositMax=100000000"));
        assert!(query.contains("priority=TIME"));
        assert!(!query.contains("monthly"));
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let router = Router::new().route(
            "/property/list",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
        );
        let source = HttpPropertySource::new(&serve(router).await).unwrap();

        match source.fetch(&payload()).await {
            Err(SearchError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn server_error_yields_no_results() {
        let router = Router::new().route(
            "/property/list",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let retriever = ResultRetriever::new(HttpPropertySource::new(&serve(router).await).unwrap());

        let items = retriever.search(&payload(), "충정로역").await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn one_bad_record_fails_the_whole_fetch() {
        let router = Router::new().route(
            "/property/list",
            get(|| async {
                Json(json!([
                    {
                        "id": 1,
                        "tradeType": "SALE",
                        "houseType": "APARTMENT",
                        "price": 1,
                        "travelTime": 1,
                        "addressNumber": "a",
                        "floor": 1
                    },
                    { "id": 2 }
                ]))
            }),
        );
        let source = HttpPropertySource::new(&serve(router).await).unwrap();

        assert!(matches!(source.fetch(&payload()).await, Err(SearchError::Parse(_))));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpPropertySource::new(&SearchConfig::new(format!("http://{}", addr))).unwrap();
        assert!(matches!(source.fetch(&payload()).await, Err(SearchError::Network(_))));
    }
}

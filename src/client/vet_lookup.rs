use std::collections::HashSet;
use crate::errors::{Result, VetsError};
use crate::helpers::endpoint::join_endpoint;
use crate::models::coordinates::Coordinates;
use crate::models::vet::VetRecord;
use crate::transport::{GetRequest, Transport};

pub const NEARBY_VETS_PATH: &str = "/api/vets/nearby";

/// Looks up veterinary clinics near a coordinate.
///
/// Every call issues exactly one GET to `{base_api_url}/api/vets/nearby`.
/// Failures are returned as they happen; nothing is retried or cached.
pub struct VetLookupClient<T> {
    transport: T,
    endpoint: String,
}

impl<T> VetLookupClient<T>
where
    T: Transport,
{
    pub fn new(base_api_url: &str, transport: T) -> Self {
        Self {
            transport,
            endpoint: join_endpoint(base_api_url, NEARBY_VETS_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn nearby_request(&self, coordinates: Coordinates) -> GetRequest {
        GetRequest::new(self.endpoint.clone(), coordinates.query_params())
    }

    /// Nothing is sent until the returned future is polled; dropping it
    /// abandons the request.
    pub async fn fetch_nearby(&self, latitude: f64, longitude: f64) -> Result<Vec<VetRecord>> {
        let coordinates = Coordinates::new(latitude, longitude)?;
        let response = self.transport
            .get(self.nearby_request(coordinates))
            .await?;

        if !response.status.is_success() {
            return Err(VetsError::Status {
                status: response.status,
                url: self.endpoint.clone(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let vets: Vec<VetRecord> = serde_json::from_slice(&response.body)?;
        ensure_unique_place_ids(&vets)?;

        Ok(vets)
    }
}

fn ensure_unique_place_ids(vets: &[VetRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(vets.len());
    for vet in vets {
        if !seen.insert(vet.place_id.as_str()) {
            return Err(VetsError::DuplicatePlaceId(vet.place_id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::json;
    use crate::transport::TransportResponse;
    use super::*;

    const BASE_URL: &str = "http://localhost:8000";

    enum Reply {
        Respond(StatusCode, Vec<u8>),
        Refuse,
    }

    struct FakeTransport {
        reply: Reply,
        seen: Mutex<Vec<GetRequest>>,
    }

    impl FakeTransport {
        fn respond(status: StatusCode, body: serde_json::Value) -> Self {
            Self::with(Reply::Respond(status, body.to_string().into_bytes()))
        }

        fn with(reply: Reply) -> Self {
            Self { reply, seen: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn get(&self, request: GetRequest) -> Result<TransportResponse> {
            self.seen.lock().unwrap().push(request);
            match &self.reply {
                Reply::Respond(status, body) => Ok(TransportResponse {
                    status: *status,
                    body: body.clone(),
                }),
                Reply::Refuse => Err(VetsError::transport(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ))),
            }
        }
    }

    fn clinic_a() -> serde_json::Value {
        json!({
            "place_id": "p1",
            "name": "Clinic A",
            "address": "1 Main St",
            "lat": 40.71,
            "lng": -74.00,
            "rating": 4.5,
            "total_ratings": 10
        })
    }

    #[tokio::test]
    async fn sends_coordinates_as_query() {
        let client = VetLookupClient::new(BASE_URL, FakeTransport::respond(StatusCode::OK, json!([])));

        client.fetch_nearby(40.7128, -74.0060).await.unwrap();

        let seen = client.transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url, "http://localhost:8000/api/vets/nearby");
        assert_eq!(
            seen[0].query,
            vec![
                ("lat".to_string(), "40.7128".to_string()),
                ("lng".to_string(), "-74.006".to_string()),
            ]
        );
        assert!(seen[0].headers.is_empty());
    }

    #[test]
    fn path_does_not_depend_on_coordinates() {
        let client = VetLookupClient::new("http://localhost:8000/", FakeTransport::respond(StatusCode::OK, json!([])));

        for (lat, lng) in [(0.0, 0.0), (-33.8688, 151.2093), (90.0, -180.0)] {
            let request = client.nearby_request(Coordinates::new(lat, lng).unwrap());
            assert_eq!(request.url, client.endpoint());
        }
        assert_eq!(client.endpoint(), "http://localhost:8000/api/vets/nearby");
    }

    #[tokio::test]
    async fn decodes_records() {
        let client = VetLookupClient::new(BASE_URL, FakeTransport::respond(StatusCode::OK, json!([clinic_a()])));

        let vets = client.fetch_nearby(40.71, -74.0).await.unwrap();

        assert_eq!(vets, vec![VetRecord {
            place_id: "p1".to_string(),
            name: "Clinic A".to_string(),
            address: "1 Main St".to_string(),
            lat: 40.71,
            lng: -74.0,
            rating: 4.5,
            total_ratings: 10,
            phone: None,
        }]);
    }

    #[tokio::test]
    async fn empty_list_is_not_an_error() {
        let client = VetLookupClient::new(BASE_URL, FakeTransport::respond(StatusCode::OK, json!([])));

        assert!(client.fetch_nearby(1.0, 1.0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn server_error_is_surfaced_with_status() {
        let client = VetLookupClient::new(
            BASE_URL,
            FakeTransport::respond(StatusCode::INTERNAL_SERVER_ERROR, json!({"detail": "An internal error occurred"})),
        );

        let err = client.fetch_nearby(1.0, 1.0).await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        match err {
            VetsError::Status { body, url, .. } => {
                assert!(body.contains("An internal error occurred"));
                assert_eq!(url, "http://localhost:8000/api/vets/nearby");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn object_body_is_a_decode_error() {
        let client = VetLookupClient::new(BASE_URL, FakeTransport::respond(StatusCode::OK, clinic_a()));

        let err = client.fetch_nearby(1.0, 1.0).await.unwrap_err();

        assert!(matches!(err, VetsError::Decode(_)));
    }

    #[tokio::test]
    async fn duplicate_place_ids_are_rejected() {
        let client = VetLookupClient::new(
            BASE_URL,
            FakeTransport::respond(StatusCode::OK, json!([clinic_a(), clinic_a()])),
        );

        let err = client.fetch_nearby(1.0, 1.0).await.unwrap_err();

        assert!(err.is_decode());
        assert!(matches!(err, VetsError::DuplicatePlaceId(id) if id == "p1"));
    }

    #[tokio::test]
    async fn transport_failure_is_passed_through() {
        let client = VetLookupClient::new(BASE_URL, FakeTransport::with(Reply::Refuse));

        let err = client.fetch_nearby(1.0, 1.0).await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(client.transport.calls(), 1);
    }

    #[tokio::test]
    async fn invalid_coordinates_never_hit_the_network() {
        let client = VetLookupClient::new(BASE_URL, FakeTransport::respond(StatusCode::OK, json!([])));

        let err = client.fetch_nearby(91.0, 0.0).await.unwrap_err();

        assert!(matches!(err, VetsError::InvalidCoordinates { .. }));
        assert_eq!(client.transport.calls(), 0);
    }

    #[tokio::test]
    async fn future_is_lazy() {
        let client = VetLookupClient::new(BASE_URL, FakeTransport::respond(StatusCode::OK, json!([])));

        let pending = client.fetch_nearby(1.0, 1.0);
        assert_eq!(client.transport.calls(), 0);

        pending.await.unwrap();
        assert_eq!(client.transport.calls(), 1);
    }
}

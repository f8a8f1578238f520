use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        auth, booking, booking_detail, configuration, invoice, room, room_type, user,
    },
    state::AppState,
};

/// OpenAPI document for every HTTP endpoint.
#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel API", description = "Hotel room booking backend"),
    paths(
        auth::sign_up,
        auth::sign_in,
        auth::sign_out,
        auth::me,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        user::get_user_type,
        room_type::create_room_type,
        room_type::get_room_types,
        room_type::get_room_type,
        room_type::update_room_type,
        room_type::delete_room_type,
        room::create_room,
        room::get_rooms,
        room::get_room,
        room::update_room,
        room::delete_room,
        room::update_room_status,
        booking::create_booking,
        booking::get_bookings,
        booking::get_booking,
        booking::update_booking,
        booking::delete_booking,
        booking_detail::get_booking_details,
        booking_detail::get_booking_detail,
        booking_detail::update_booking_detail,
        invoice::get_invoices,
        invoice::get_invoice,
        configuration::get_configurations,
        configuration::get_configuration,
        configuration::update_configuration,
    ),
    tags(
        (name = "auth", description = "Sign up, sign in and session"),
        (name = "user", description = "Guest accounts and user types"),
        (name = "room_type", description = "Room type catalog"),
        (name = "room", description = "Rooms and their status"),
        (name = "booking", description = "Bookings of one or more rooms"),
        (name = "booking_detail", description = "Single room stays"),
        (name = "invoice", description = "Invoices of stays"),
        (name = "configuration", description = "Pricing configuration"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/sign-up", post(auth::sign_up))
        .route("/api/auth/sign-in", post(auth::sign_in))
        .route("/api/auth/sign-out", post(auth::sign_out))
        .route("/api/auth/me", get(auth::me))
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/user-types/{type_name}", get(user::get_user_type))
        .route(
            "/api/room-types",
            get(room_type::get_room_types).post(room_type::create_room_type),
        )
        .route(
            "/api/room-types/{id}",
            get(room_type::get_room_type)
                .patch(room_type::update_room_type)
                .delete(room_type::delete_room_type),
        )
        .route("/api/rooms", get(room::get_rooms).post(room::create_room))
        .route(
            "/api/rooms/{id}",
            get(room::get_room)
                .patch(room::update_room)
                .delete(room::delete_room),
        )
        .route("/api/rooms/{id}/status", patch(room::update_room_status))
        .route(
            "/api/bookings",
            get(booking::get_bookings).post(booking::create_booking),
        )
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking)
                .patch(booking::update_booking)
                .delete(booking::delete_booking),
        )
        .route(
            "/api/booking-details",
            get(booking_detail::get_booking_details),
        )
        .route(
            "/api/booking-details/{id}",
            get(booking_detail::get_booking_detail).patch(booking_detail::update_booking_detail),
        )
        .route("/api/invoices", get(invoice::get_invoices))
        .route("/api/invoices/{id}", get(invoice::get_invoice))
        .route(
            "/api/configurations",
            get(configuration::get_configurations),
        )
        .route(
            "/api/configurations/{id}",
            get(configuration::get_configuration).patch(configuration::update_configuration),
        )
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use sea_orm::DatabaseConnection;
    use serde_json::{json, Value};
    use test_utils::{
        builder::TestBuilder,
        factory::{self, user::DEFAULT_PASSWORD},
    };
    use tower::ServiceExt;

    use crate::server::{error::AppError, startup};

    async fn app(db: &DatabaseConnection) -> Result<Router, AppError> {
        let session = startup::connect_to_session(db).await?;

        Ok(router()
            .with_state(AppState::new(db.clone()))
            .layer(session))
    }

    fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Signs in through the API and returns the `name=value` part of the session cookie.
    async fn sign_in(app: &Router, email: &str) -> String {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/sign-in",
                None,
                json!({ "email": email, "password": DEFAULT_PASSWORD }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    /// Tests serving the OpenAPI document.
    ///
    /// Expected: 200 with the booking routes listed under `paths`
    #[tokio::test]
    async fn serves_openapi_document() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = app(db).await?;

        let response = app
            .oneshot(get_request("/api/docs/openapi.json", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["paths"]["/api/bookings/{id}"].is_object());
        assert!(body["paths"]["/api/rooms/{id}/status"].is_object());

        Ok(())
    }

    /// Tests that room types are readable without signing in.
    ///
    /// Expected: 200 with the catalog
    #[tokio::test]
    async fn lists_room_types_publicly() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::room_type::RoomTypeFactory::new(db)
            .name("A")
            .build()
            .await?;
        let app = app(db).await?;

        let response = app.oneshot(get_request("/api/room-types", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["name"], "A");

        Ok(())
    }

    /// Tests a protected route without a session.
    ///
    /// Expected: 401 Unauthorized
    #[tokio::test]
    async fn rejects_bookings_without_session() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = app(db).await?;

        let response = app.oneshot(get_request("/api/bookings", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Tests sign-up payload validation.
    ///
    /// Expected: 400 Bad Request for a malformed email, nothing written
    #[tokio::test]
    async fn rejects_invalid_sign_up() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = app(db).await?;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/sign-up",
                None,
                json!({
                    "email": "not-an-email",
                    "password": "secret123",
                    "full_name": "Jane Doe",
                    "nationality": "Vietnam",
                    "dob": "1990-01-01",
                    "phone_number": "0900000000",
                    "address": "1 Harbour Street",
                    "identity_number": "ID000001",
                    "user_type_name": "local"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Tests booking a room through the API after signing in.
    ///
    /// Expected: 201 with two nights at 150000 and the stay listed under the booking
    #[tokio::test]
    async fn books_room_after_sign_in() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let room = factory::create_room(db).await?;
        let app = app(db).await?;

        let cookie = sign_in(&app, &user.email).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/bookings",
                Some(&cookie),
                json!({
                    "booking_details": [{
                        "room_id": room.id,
                        "start_date": "2030-05-01",
                        "end_date": "2030-05-03",
                        "number_of_guests": 2
                    }]
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["total_price"], json!(300_000.0));
        assert_eq!(body["booking_details"][0]["room_id"], json!(room.id));

        let response = app
            .oneshot(get_request("/api/auth/me", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["email"], json!(user.email));

        Ok(())
    }

    /// Tests an admin-only route as a guest.
    ///
    /// Expected: 403 Forbidden
    #[tokio::test]
    async fn forbids_guest_from_creating_room_types() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let app = app(db).await?;

        let cookie = sign_in(&app, &user.email).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/room-types",
                Some(&cookie),
                json!({ "name": "D", "room_price": 250000.0 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Tests removing a whole booking through the API.
    ///
    /// Expected: 204 No Content, then 404 when reading it again
    #[tokio::test]
    async fn deletes_booking_without_detail_ids() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let room = factory::create_room(db).await?;
        let booking = factory::create_booking(db, user.id, 300_000.0).await?;
        factory::booking::BookingDetailFactory::new(db, user.id, room.id)
            .booking_id(booking.id)
            .build()
            .await?;
        let app = app(db).await?;

        let cookie = sign_in(&app, &user.email).await;
        let uri = format!("/api/bookings/{}", booking.id);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(&uri)
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get_request(&uri, Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

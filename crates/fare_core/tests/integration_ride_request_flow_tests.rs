mod support;

use fare_core::countdown::{Countdown, CountdownTick, RIDE_REQUEST_TIMEOUT_SECS};
use fare_core::earnings::EarningsSummary;
use fare_core::fixtures::{
    audit_request, current_driver, nearby_riders, pending_requests, recent_rides,
    weekly_earnings,
};
use fare_core::nearby::{nearest_first, within_radius};
use fare_core::quote::{quote_distance, quote_trip, QuoteConfig};
use fare_core::{format_currency, format_duration};
use support::points::driver_position;

#[test]
fn map_lists_nearby_riders_nearest_first() {
    let riders = nearby_riders();
    let ranked = nearest_first(current_driver().location, &riders);
    let ids: Vec<_> = ranked.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, ["r-001", "r-002", "r-003"]);
    assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
}

#[test]
fn only_close_riders_within_a_hundred_metres() {
    let riders = nearby_riders();
    let hits = within_radius(driver_position(), &riders, 0.1).expect("valid radius");
    assert_eq!(hits.len(), 2);
}

#[test]
fn unanswered_request_expires_after_thirty_seconds() {
    let request = &pending_requests()[0];
    let mut countdown = Countdown::ride_request();
    let mut expired_at = None;
    for second in 1..=RIDE_REQUEST_TIMEOUT_SECS + 5 {
        if countdown.tick() == CountdownTick::Expired {
            expired_at = Some(second);
        }
    }
    assert_eq!(expired_at, Some(RIDE_REQUEST_TIMEOUT_SECS), "{}", request.id);
}

#[test]
fn accepted_request_moves_to_pickup_then_trip_countdown() {
    let mut request_timer = Countdown::ride_request();
    request_timer.advance(12);
    request_timer.freeze();
    assert_eq!(request_timer.advance(60), CountdownTick::Idle);

    let quote = quote_distance(pending_requests()[0].estimated_distance_km, &QuoteConfig::default())
        .expect("valid quote");
    let mut ride_timer = Countdown::pickup();
    ride_timer.advance(90);
    assert_eq!(ride_timer.display(), "1:30");

    ride_timer.restart(quote.eta_minutes * 60);
    assert_eq!(ride_timer.display(), "17:00");
}

#[test]
fn request_card_strings_come_from_the_quote() {
    let request = &pending_requests()[1];
    let quote = quote_distance(request.estimated_distance_km, &QuoteConfig::default())
        .expect("valid quote");
    let summary = quote.summary();
    assert_eq!(summary.distance, "3.2 km");
    assert_eq!(summary.duration, "10 min");
    assert_eq!(summary.price, "₹80");
}

#[test]
fn straight_line_quote_is_never_above_road_distance_quote() {
    let config = QuoteConfig::default();
    for request in pending_requests() {
        let straight = quote_trip(request.pickup.point, request.drop.point, &config)
            .expect("valid quote");
        let road = quote_distance(request.estimated_distance_km, &config).expect("valid quote");
        assert!(straight.total_price() <= road.total_price(), "{}", request.id);
    }
}

#[test]
fn audits_cover_every_pending_request() {
    let config = QuoteConfig::default();
    let audits: Vec<_> = pending_requests()
        .iter()
        .map(|r| audit_request(r, &config).expect("valid audit"))
        .collect();
    assert_eq!(audits.len(), 3);
    assert!(audits.iter().all(|a| a.formula_price % 5 == 0));
}

#[test]
fn dashboard_totals_for_the_week() {
    let summary = EarningsSummary::from_days(&weekly_earnings());
    assert_eq!(summary.total_amount, 8700);
    assert_eq!(summary.total_rides, 71);
    assert_eq!(summary.formatted_total(), "₹8,700");
    assert_eq!(format_currency(current_driver().total_earnings as i64), "₹1,56,430");
}

#[test]
fn recent_ride_durations_render() {
    let rendered: Vec<_> = recent_rides()
        .iter()
        .map(|r| format_duration(r.duration_min))
        .collect();
    assert_eq!(rendered, ["38 min", "25 min", "55 min"]);
}

//! Room fan-out tests over the realtime hub.

use serde_json::json;

use seatledger_realtime::{InboundMessage, OutboundMessage, SeatStatusChange};

use crate::helpers::TestApp;

fn change() -> SeatStatusChange {
    SeatStatusChange {
        id: "L-101".into(),
        status: "Paid".into(),
        seat: "A3".into(),
        shift: "S1".into(),
    }
}

#[tokio::test]
async fn room_members_receive_the_identical_payload() {
    let app = TestApp::new().await;
    let hub = &app.state.hub;

    let (client_a, _rx_a) = hub.register();
    let (client_b, mut rx_b) = hub.register();
    let (client_c, mut rx_c) = hub.register();

    // A and B share R1; C sits in a different room.
    hub.handle_inbound(
        client_a.id,
        &json!({ "event": "joinRoom", "data": { "room": "R1" } }).to_string(),
    );
    hub.handle_inbound(
        client_b.id,
        &json!({ "event": "joinSeatsRoom", "data": { "room": "R1" } }).to_string(),
    );
    hub.handle_inbound(
        client_c.id,
        &json!({ "event": "joinRoom", "data": { "room": "R2" } }).to_string(),
    );
    assert!(matches!(
        rx_b.recv().await,
        Some(OutboundMessage::RoomJoined { .. })
    ));
    assert!(matches!(
        rx_c.recv().await,
        Some(OutboundMessage::RoomJoined { .. })
    ));

    let frame = serde_json::to_string(&InboundMessage::UpdateSeatStatus(change())).unwrap();
    hub.handle_inbound(client_a.id, &frame);

    // B gets the verbatim payload; C hears nothing.
    assert_eq!(
        rx_b.recv().await,
        Some(OutboundMessage::SeatStatusUpdate(change()))
    );
    assert!(rx_c.try_recv().is_err());
}

#[tokio::test]
async fn disconnected_clients_simply_miss_events() {
    let app = TestApp::new().await;
    let hub = &app.state.hub;

    let (sender, _rx_s) = hub.register();
    let (listener, mut rx_l) = hub.register();
    hub.join_room(sender.id, "R1");
    hub.join_room(listener.id, "R1");
    assert!(matches!(
        rx_l.recv().await,
        Some(OutboundMessage::RoomJoined { .. })
    ));

    hub.unregister(listener.id);

    // Delivery is best-effort: broadcasting after the disconnect is not
    // an error, the event is just gone for that client.
    hub.broadcast_seat_status("R1", &change(), Some(sender.id));
    assert!(rx_l.try_recv().is_err());
}

use rt_core::VehicleId;

use crate::event::{Event, EventKind};
use crate::sink::{ChannelSink, EventSink, NoopSink};

#[test]
fn noop_sink_accepts_every_event_without_panicking() {
    let sink = NoopSink;
    sink.emit(Event {
        source: "Junction 1".into(),
        seq: 1,
        kind: EventKind::LocationFailed,
    });
}

#[tokio::test]
async fn channel_sink_delivers_events_in_publish_order() {
    let (sink, mut rx) = ChannelSink::new();
    sink.emit(Event {
        source: "t1".into(),
        seq: 1,
        kind: EventKind::TrainFailed { train: VehicleId::Train(1) },
    });
    sink.emit(Event {
        source: "t1".into(),
        seq: 2,
        kind: EventKind::TrainRepaired { train: VehicleId::Train(1) },
    });

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(first.seq, 1);
    assert_eq!(second.seq, 2);
}

#[tokio::test]
async fn channel_sink_emit_does_not_panic_after_receiver_dropped() {
    let (sink, rx) = ChannelSink::new();
    drop(rx);
    sink.emit(Event { source: "x".into(), seq: 1, kind: EventKind::LocationRepaired });
}

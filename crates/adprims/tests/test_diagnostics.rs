//! Golden output of the advisory side channel.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use adprims::diagnostics::ADVISORY_TARGET;
use adprims::prims::maximum;
use adprims::{Arena, Context, Mode, NullSink, OpId, RecordingSink, Registry, Value, Vector};

/// Captures advisory-target records as `LEVEL message`.
struct Capture {
    lines: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target() == ADVISORY_TARGET
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.lines
                .lock()
                .unwrap()
                .push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_log_sink_golden_output() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let arena = Arena::new();
    let cx = Context::new(&arena);
    let v = Vector::from_vec_in(&arena, vec![0.5, -1.0, 4.0]).unwrap();
    let dv = Vector::from_vec_in(&arena, vec![1.0, 2.0, 3.0]).unwrap();

    maximum::forward(&cx, &v, &dv).unwrap();
    maximum::reverse(&cx, &v, 1.0).unwrap();
    // Advisories fire even when the call then fails.
    let short = Vector::from_vec_in(&arena, vec![1.0]).unwrap();
    assert!(maximum::forward(&cx, &v, &short).is_err());
    // Primal evaluation is validated and stays silent.
    maximum::primal(&v).unwrap();

    let lines = CAPTURE.lines.lock().unwrap().clone();
    assert_eq!(
        lines,
        vec![
            format!("{} [forward maximum untested]", Level::Warn),
            format!("{} [reverse maximum untested]", Level::Warn),
            format!("{} [forward maximum untested]", Level::Warn),
        ]
    );
}

#[test]
fn test_advisories_in_call_order() {
    let registry = Registry::standard().unwrap();
    let arena = Arena::new();
    let sink = RecordingSink::new();
    let cx = Context::with_sink(&arena, &sink);
    let v = Vector::from_vec_in(&arena, vec![1.0, 9.0, 3.0]).unwrap();
    let dv = Vector::from_vec_in(&arena, vec![0.1, 0.2, 0.3]).unwrap();

    registry
        .call(&cx, OpId::Maximum, Mode::Reverse, &[v.clone().into(), Value::Float(1.0)])
        .unwrap();
    registry
        .call(&cx, OpId::Maximum, Mode::Forward, &[v.clone().into(), dv.into()])
        .unwrap();
    registry
        .call(&cx, OpId::Maximum, Mode::Primal, &[v.into()])
        .unwrap();

    assert_eq!(
        sink.rendered(),
        vec!["[reverse maximum untested]", "[forward maximum untested]"]
    );
    let records = sink.take();
    assert_eq!(records[0].op, OpId::Maximum);
    assert_eq!(records[0].mode, Mode::Reverse);
    assert!(sink.is_empty());
}

#[test]
fn test_advisories_never_change_results() {
    let arena = Arena::new();
    let recording = RecordingSink::new();
    let loud = Context::with_sink(&arena, &recording);
    let quiet = Context::with_sink(&arena, &NullSink);
    let v = Vector::from_vec_in(&arena, vec![2.0, -3.0, 2.5, 0.0]).unwrap();
    let dv = Vector::from_vec_in(&arena, vec![4.0, 5.0, 6.0, 7.0]).unwrap();

    assert_eq!(
        maximum::forward(&loud, &v, &dv).unwrap(),
        maximum::forward(&quiet, &v, &dv).unwrap()
    );
    assert_eq!(
        maximum::reverse(&loud, &v, 0.5).unwrap(),
        maximum::reverse(&quiet, &v, 0.5).unwrap()
    );
    assert_eq!(recording.len(), 2);
}

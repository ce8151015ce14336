//! entry-trace: builds a few sample entries, fans them out to dispatch
//! targets and prints what each target would receive.
//!
//! Usage: `entry-trace [config.toml]`

use anyhow::Context;
use input_entries::entry::KeyEntry;
use input_entries::entry::MotionEntry;
use input_entries::input::{
    DeviceId, EventId, InputTargetFlags, KeyAction, KeyCode, KeyFlags, LogicalDisplayId,
    MotionAction, MotionClassification, MotionFlags, PointerCoords, PointerProperties, Pointers,
    PolicyFlags, Source, ToolType, Transform, Uid,
};
use input_entries::{
    init_logging, verified_event, DescriptionMode, DispatchEntry, DispatchTarget, EntryConfig,
    EntryStateTable, EventEntry, SequenceAllocator,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

fn sample_entries() -> anyhow::Result<Vec<Arc<EventEntry>>> {
    let key = EventEntry::key(
        EventId(1),
        None,
        1_000,
        PolicyFlags::FILTERED | PolicyFlags::PASS_TO_USER,
        KeyEntry {
            device_id: DeviceId(3),
            source: Source::KEYBOARD,
            display_id: LogicalDisplayId::DEFAULT,
            action: KeyAction::Down,
            flags: KeyFlags::FROM_SYSTEM,
            key_code: KeyCode::ENTER,
            scan_code: 28,
            meta_state: 0,
            repeat_count: 0,
            down_time: 1_000,
        },
    );

    let pointers = Pointers::new(
        vec![
            PointerProperties::new(0, ToolType::Finger),
            PointerProperties::new(1, ToolType::Finger),
        ],
        vec![PointerCoords::from_xy(120.0, 340.0), PointerCoords::from_xy(400.0, 300.0)],
    )
    .context("Failed to build sample pointers")?;

    let motion = EventEntry::motion(
        EventId(2),
        None,
        2_000,
        PolicyFlags::FILTERED | PolicyFlags::PASS_TO_USER,
        MotionEntry {
            device_id: DeviceId(4),
            source: Source::TOUCHSCREEN,
            display_id: LogicalDisplayId::DEFAULT,
            action: MotionAction::with_pointer_index(MotionAction::POINTER_DOWN, 1),
            action_button: 0,
            flags: MotionFlags::WINDOW_IS_PARTIALLY_OBSCURED,
            meta_state: 0,
            button_state: 0,
            classification: MotionClassification::None,
            edge_flags: 0,
            x_precision: 1.0,
            y_precision: 1.0,
            x_cursor_position: f32::NAN,
            y_cursor_position: f32::NAN,
            down_time: 1_900,
            pointers,
        },
    );

    Ok(vec![Arc::new(key), Arc::new(motion)])
}

fn sample_targets() -> Vec<DispatchTarget> {
    vec![
        DispatchTarget {
            target_flags: InputTargetFlags::FOREGROUND | InputTargetFlags::SPLIT,
            transform: Transform::from_translation(-100.0, -200.0),
            target_uid: Uid(10_001),
            window_id: Some(1),
            ..Default::default()
        },
        DispatchTarget {
            target_flags: InputTargetFlags::DISPATCH_AS_OUTSIDE,
            transform: Transform::from_scale(0.5, 0.5),
            global_scale_factor: 0.5,
            target_uid: Uid(10_002),
            window_id: Some(2),
            ..Default::default()
        },
        DispatchTarget {
            target_flags: InputTargetFlags::FOREGROUND,
            target_uid: Uid(1_000),
            window_id: Some(3),
            ..Default::default()
        },
    ]
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = EntryConfig::load(config_path.as_deref()).context("Failed to load configuration")?;
    init_logging(&config);

    let mode = DescriptionMode::from(&config);
    tracing::info!("entry-trace v{} (mode={:?})", env!("CARGO_PKG_VERSION"), mode);

    let sequences = Arc::new(SequenceAllocator::new());
    let entries = sample_entries()?;
    let mut states = EntryStateTable::new();

    for entry in &entries {
        states.track(entry);
        states.begin_dispatch(entry.id());
        tracing::info!("Dispatching {}", entry.description(mode));

        let handles: Vec<_> = sample_targets()
            .into_iter()
            .map(|target| {
                let entry = entry.clone();
                let sequences = sequences.clone();
                thread::spawn(move || DispatchEntry::new(entry, target, &sequences))
            })
            .collect();

        for handle in handles {
            let dispatch = handle
                .join()
                .map_err(|_| anyhow::anyhow!("Dispatch thread panicked"))?;
            tracing::info!("  {}", dispatch.description(mode));

            if let Some(verified) = verified_event(&dispatch.event_entry, &dispatch.raw_transform) {
                let json = serde_json::to_string(&verified)
                    .context("Failed to serialize verified event")?;
                println!("seq={} {}", dispatch.seq, json);
            }
        }

        states.finish_dispatch(entry.id());
        states.release(entry.id());
    }

    tracing::info!("Done, {} entries still tracked", states.len());
    Ok(())
}

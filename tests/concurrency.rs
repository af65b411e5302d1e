// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Concurrent dispatch tests.
//!
//! The backends here wrap the in-memory ones, yield to the scheduler before
//! every operation and record what they were asked to do. The recording
//! shows whether registry updates and log appends of concurrent commands
//! interleaved.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use homecmd::{
    Action, CommandDispatcher, CommandIntent, Device, DeviceId, DeviceRegistry, ManualClock,
    MemoryRegistry, MemoryUsageLog, PowerStatus, StorageError, UsageLog, UsageLogEntry,
};
use parking_lot::Mutex;
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    SetStatus(DeviceId, PowerStatus),
    Append(DeviceId, Action),
}

impl Op {
    fn device_id(&self) -> &DeviceId {
        match self {
            Self::SetStatus(id, _) | Self::Append(id, _) => id,
        }
    }
}

type Journal = Arc<Mutex<Vec<Op>>>;

struct RecordingRegistry {
    inner: MemoryRegistry,
    journal: Journal,
}

#[async_trait]
impl DeviceRegistry for RecordingRegistry {
    async fn get(&self, device_id: &DeviceId) -> Result<Option<Device>, StorageError> {
        tokio::task::yield_now().await;
        self.inner.get(device_id).await
    }

    async fn set_status(
        &self,
        device_id: &DeviceId,
        status: PowerStatus,
    ) -> Result<Option<Device>, StorageError> {
        tokio::task::yield_now().await;
        self.journal
            .lock()
            .push(Op::SetStatus(device_id.clone(), status));
        self.inner.set_status(device_id, status).await
    }
}

struct RecordingLog {
    inner: MemoryUsageLog,
    journal: Journal,
}

#[async_trait]
impl UsageLog for RecordingLog {
    async fn append(&self, entry: UsageLogEntry) -> Result<(), StorageError> {
        tokio::task::yield_now().await;
        self.journal
            .lock()
            .push(Op::Append(entry.device_id().clone(), entry.action()));
        self.inner.append(entry).await
    }

    async fn entries(&self) -> Result<Vec<UsageLogEntry>, StorageError> {
        self.inner.entries().await
    }
}

struct Recorded {
    registry: Arc<RecordingRegistry>,
    log: Arc<RecordingLog>,
    journal: Journal,
    dispatcher: Arc<CommandDispatcher>,
}

async fn recorded(devices: &[&str]) -> Recorded {
    let journal = Journal::default();
    let inner = MemoryRegistry::new();
    for name in devices {
        inner
            .register(Device::new(DeviceId::new(name).unwrap(), *name, PowerStatus::Off))
            .await
            .unwrap();
    }
    let registry = Arc::new(RecordingRegistry {
        inner,
        journal: journal.clone(),
    });
    let log = Arc::new(RecordingLog {
        inner: MemoryUsageLog::new(),
        journal: journal.clone(),
    });
    // Frozen clock: every entry ties, so log order is commit order
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 8, 8, 8, 0, 0).unwrap(),
    ));
    let dispatcher = Arc::new(CommandDispatcher::new(
        registry.clone(),
        log.clone(),
        clock,
    ));
    Recorded {
        registry,
        log,
        journal,
        dispatcher,
    }
}

fn action_for(i: usize) -> &'static str {
    if i % 2 == 0 { "TURN_ON" } else { "TURN_OFF" }
}

/// Asserts that the device's operations come in (update, append) pairs
/// whose status and action agree.
fn assert_paired(journal: &[Op], device_id: &DeviceId) -> usize {
    let ops: Vec<_> = journal
        .iter()
        .filter(|op| op.device_id() == device_id)
        .collect();
    assert_eq!(ops.len() % 2, 0, "unpaired operations: {ops:?}");

    for pair in ops.chunks(2) {
        match (pair[0], pair[1]) {
            (Op::SetStatus(_, status), Op::Append(_, action)) => {
                assert_eq!(*status, action.target_status(), "mismatched pair: {pair:?}");
            }
            _ => panic!("interleaved operations: {pair:?}"),
        }
    }
    ops.len() / 2
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn same_device_dispatches_are_serialized() {
    const N: usize = 64;
    let rec = recorded(&["lamp-1"]).await;

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let dispatcher = Arc::clone(&rec.dispatcher);
            tokio::spawn(async move {
                dispatcher
                    .dispatch(&CommandIntent::new("lamp-1", action_for(i)))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let lamp = DeviceId::new("lamp-1").unwrap();
    let journal = rec.journal.lock().clone();
    assert_eq!(assert_paired(&journal, &lamp), N);

    let entries = rec.log.entries().await.unwrap();
    assert_eq!(entries.len(), N);

    // Last committed command decides the final status
    let last = entries.last().unwrap();
    let device = rec.registry.get(&lamp).await.unwrap().unwrap();
    assert_eq!(device.status(), last.action().target_status());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_devices_keep_their_own_pairs() {
    const PER_DEVICE: usize = 16;
    let names = ["lamp-1", "lamp-2", "fan", "heater"];
    let rec = recorded(&names).await;

    let mut handles = Vec::new();
    for i in 0..PER_DEVICE {
        for name in names {
            let dispatcher = Arc::clone(&rec.dispatcher);
            handles.push(tokio::spawn(async move {
                dispatcher
                    .dispatch(&CommandIntent::new(name, action_for(i)))
                    .await
            }));
        }
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let journal = rec.journal.lock().clone();
    for name in names {
        let device_id = DeviceId::new(name).unwrap();
        assert_eq!(assert_paired(&journal, &device_id), PER_DEVICE);

        let entries = rec.log.entries_for(&device_id).await.unwrap();
        let device = rec.registry.get(&device_id).await.unwrap().unwrap();
        assert_eq!(
            device.status(),
            entries.last().unwrap().action().target_status()
        );
    }
}

/// Registry that holds `set_status` for one device until released.
struct GatedRegistry {
    inner: MemoryRegistry,
    gated: DeviceId,
    gate: Notify,
}

#[async_trait]
impl DeviceRegistry for GatedRegistry {
    async fn get(&self, device_id: &DeviceId) -> Result<Option<Device>, StorageError> {
        self.inner.get(device_id).await
    }

    async fn set_status(
        &self,
        device_id: &DeviceId,
        status: PowerStatus,
    ) -> Result<Option<Device>, StorageError> {
        if *device_id == self.gated {
            self.gate.notified().await;
        }
        self.inner.set_status(device_id, status).await
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_device_does_not_block_others() {
    let inner = MemoryRegistry::new();
    for name in ["slow", "fast"] {
        inner
            .register(Device::new(DeviceId::new(name).unwrap(), name, PowerStatus::Off))
            .await
            .unwrap();
    }
    let registry = Arc::new(GatedRegistry {
        inner,
        gated: DeviceId::new("slow").unwrap(),
        gate: Notify::new(),
    });
    let dispatcher = Arc::new(CommandDispatcher::new(
        registry.clone(),
        Arc::new(MemoryUsageLog::new()),
        Arc::new(ManualClock::new(Utc::now())),
    ));

    let slow = {
        let dispatcher = Arc::clone(&dispatcher);
        tokio::spawn(async move {
            dispatcher
                .dispatch(&CommandIntent::new("slow", "TURN_ON"))
                .await
        })
    };

    let fast = tokio::time::timeout(
        Duration::from_secs(5),
        dispatcher.dispatch(&CommandIntent::new("fast", "TURN_ON")),
    )
    .await
    .expect("fast device was blocked by slow device")
    .unwrap();
    assert_eq!(fast.status, PowerStatus::On);
    assert!(!slow.is_finished());

    registry.gate.notify_one();
    let slow = slow.await.unwrap().unwrap();
    assert_eq!(slow.status, PowerStatus::On);
}

//! Shared utilities for integration tests: a scripted in-memory cluster.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};

use scbctl::cluster::{
    ClusterClient, ClusterContext, ClusterError, ClusterResult, LogOptions, LogStream, WorkerHandle,
};
use scbctl::scan::Scan;

/// How the log stream of the selected worker behaves.
#[allow(dead_code)]
pub enum StreamScript {
    /// Deliver these lines, then close.
    Lines(Vec<&'static str>),
    /// Deliver these lines, then stay open forever.
    LinesThenHang(Vec<&'static str>),
    /// Deliver these lines, then fail.
    LinesThenError(Vec<&'static str>),
    /// Refuse to open.
    OpenError,
    /// Never finish opening.
    OpenHang,
}

/// Sets the flag when dropped; moved into the stream to observe teardown.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// In-memory `ClusterClient` that replays scripted responses and records calls.
pub struct MockCluster {
    listings: Mutex<VecDeque<ClusterResult<Vec<WorkerHandle>>>>,
    list_hangs: AtomicBool,
    create_error: Mutex<Option<ClusterError>>,
    stream_script: Mutex<Option<StreamScript>>,
    pub created: Mutex<Vec<Scan>>,
    pub list_calls: Mutex<Vec<String>>,
    pub opened: Mutex<Vec<(WorkerHandle, LogOptions)>>,
    pub stream_dropped: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockCluster {
    pub fn new() -> Self {
        Self {
            listings: Mutex::new(VecDeque::new()),
            list_hangs: AtomicBool::new(false),
            create_error: Mutex::new(None),
            stream_script: Mutex::new(None),
            created: Mutex::new(Vec::new()),
            list_calls: Mutex::new(Vec::new()),
            opened: Mutex::new(Vec::new()),
            stream_dropped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Queue one listing of worker names. The last listing repeats once the queue drains.
    pub fn with_listing(self, names: &[&str]) -> Self {
        let handles = names
            .iter()
            .enumerate()
            .map(|(i, name)| WorkerHandle::new(format!("uid-{i}"), *name, "default"))
            .collect();
        self.with_handles(handles)
    }

    /// Queue one listing of fully specified handles.
    pub fn with_handles(self, handles: Vec<WorkerHandle>) -> Self {
        self.listings.lock().unwrap().push_back(Ok(handles));
        self
    }

    pub fn with_list_error(self, error: ClusterError) -> Self {
        self.listings.lock().unwrap().push_back(Err(error));
        self
    }

    /// Every listing call is recorded and then never completes.
    pub fn with_list_hang(self) -> Self {
        self.list_hangs.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_create_error(self, error: ClusterError) -> Self {
        *self.create_error.lock().unwrap() = Some(error);
        self
    }

    pub fn with_stream(self, script: StreamScript) -> Self {
        *self.stream_script.lock().unwrap() = Some(script);
        self
    }

    pub fn context(self: &Arc<Self>, namespace: &str) -> ClusterContext {
        ClusterContext::new(self.clone(), namespace)
    }

    pub fn create_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.lock().unwrap().len()
    }

    pub fn open_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }

    pub fn stream_was_dropped(&self) -> bool {
        self.stream_dropped.load(Ordering::SeqCst)
    }

    fn next_listing(&self) -> ClusterResult<Vec<WorkerHandle>> {
        let mut listings = self.listings.lock().unwrap();
        if listings.len() > 1 {
            return listings.pop_front().unwrap();
        }
        match listings.front() {
            Some(Ok(handles)) => Ok(handles.clone()),
            Some(Err(_)) => listings.pop_front().unwrap(),
            None => Ok(Vec::new()),
        }
    }
}

fn chunks(lines: Vec<&'static str>) -> impl futures_util::Stream<Item = ClusterResult<Vec<u8>>> {
    stream::iter(lines.into_iter().map(|line| Ok(format!("{line}\n").into_bytes())))
}

#[async_trait]
impl ClusterClient for MockCluster {
    async fn create_scan(&self, scan: &Scan) -> ClusterResult<Scan> {
        self.created.lock().unwrap().push(scan.clone());
        if let Some(error) = self.create_error.lock().unwrap().take() {
            return Err(error);
        }
        let mut accepted = scan.clone();
        accepted.metadata.uid = Some("scan-uid-1".to_string());
        Ok(accepted)
    }

    async fn list_workers(&self, namespace: &str) -> ClusterResult<Vec<WorkerHandle>> {
        self.list_calls.lock().unwrap().push(namespace.to_string());
        if self.list_hangs.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        self.next_listing()
    }

    async fn open_log_stream(
        &self,
        worker: &WorkerHandle,
        options: &LogOptions,
    ) -> ClusterResult<LogStream> {
        self.opened
            .lock()
            .unwrap()
            .push((worker.clone(), options.clone()));

        let script = self
            .stream_script
            .lock()
            .unwrap()
            .take()
            .unwrap_or(StreamScript::Lines(Vec::new()));

        let stream: LogStream = match script {
            StreamScript::Lines(lines) => chunks(lines).boxed(),
            StreamScript::LinesThenHang(lines) => chunks(lines).chain(stream::pending()).boxed(),
            StreamScript::LinesThenError(lines) => chunks(lines)
                .chain(stream::once(async {
                    Err(ClusterError::Io(std::io::Error::new(
                        std::io::ErrorKind::ConnectionReset,
                        "connection reset by peer",
                    )))
                }))
                .boxed(),
            StreamScript::OpenError => {
                return Err(ClusterError::PodNotReady {
                    job: worker.name.clone(),
                    waited_secs: 20,
                })
            }
            StreamScript::OpenHang => {
                std::future::pending::<()>().await;
                stream::empty().boxed()
            }
        };

        let guard = DropFlag(self.stream_dropped.clone());
        Ok(stream
            .map(move |chunk| {
                let _guard = &guard;
                chunk
            })
            .boxed())
    }
}

//! Detached background work with logged, never-propagated failures.

use std::fmt::Display;
use std::future::Future;

use tracing::{Instrument, Span, debug, error};

/// Spawns `task` on the runtime without awaiting it.
///
/// The task runs inside `span`, so its log lines carry the caller's context
/// (request id, short code). A failure is logged once at ERROR and dropped:
/// there is no retry and nothing is reported back to the caller. The task is
/// not tied to the caller's lifetime and keeps running if the client
/// disconnects.
pub fn spawn_detached<F, E>(name: &'static str, span: Span, task: F)
where
    F: Future<Output = Result<(), E>> + Send + 'static,
    E: Display,
{
    tokio::spawn(
        async move {
            match task.await {
                Ok(()) => debug!(task = name, "Background task completed"),
                Err(e) => error!(task = name, error = %e, "Background task failed"),
            }
        }
        .instrument(span),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    async fn wait_for_runs(runs: &AtomicUsize, expected: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while runs.load(Ordering::SeqCst) != expected {
            assert!(tokio::time::Instant::now() < deadline, "task did not run");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_spawn_detached_runs_task() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();

        spawn_detached("count", Span::none(), async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<(), String>(())
        });

        wait_for_runs(&runs, 1).await;
    }

    #[tokio::test]
    async fn test_spawn_detached_swallows_errors() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();

        spawn_detached("failing", Span::none(), async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>("boom")
        });

        wait_for_runs(&runs, 1).await;
    }

    #[tokio::test]
    async fn test_spawn_detached_logs_failures_at_error() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(Level::DEBUG)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        spawn_detached("increment_click_count", Span::none(), async {
            Err::<(), _>("connection refused")
        });

        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while !logs.contents().contains("connection refused") {
            assert!(tokio::time::Instant::now() < deadline, "failure was not logged");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let output = logs.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains("increment_click_count"));
    }
}

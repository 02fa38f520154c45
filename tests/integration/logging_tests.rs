use fable_pack::{BaseDir, BuildInputs, ConfigAssembler};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn assemble_with_log(args: &[&str]) -> String {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    let inputs = BuildInputs::new(BaseDir::new("/home/dev/suave-fable").unwrap()).with_args(args.to_vec());
    tracing::subscriber::with_default(subscriber, || {
        ConfigAssembler::new().assemble(&inputs);
    });

    log.contents()
}

#[test]
fn test_development_status_line_logged_once() {
    let output = assemble_with_log(&["node", "build"]);

    assert_eq!(output.matches("Bundling for development...").count(), 1);
    assert!(!output.contains("Bundling for production"));
}

#[test]
fn test_production_status_line_logged_once() {
    let output = assemble_with_log(&["node", "build", "-p"]);

    assert_eq!(output.matches("Bundling for production...").count(), 1);
    assert!(!output.contains("Bundling for development"));
}

#[test]
fn test_each_assembly_logs_its_own_status_line() {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_ansi(false)
        .finish();

    let base = BaseDir::new("/home/dev/suave-fable").unwrap();
    tracing::subscriber::with_default(subscriber, || {
        let assembler = ConfigAssembler::new();
        assembler.assemble(&BuildInputs::new(base.clone()));
        assembler.assemble(&BuildInputs::new(base.clone()).with_args(["-p"]));
        assembler.assemble(&BuildInputs::new(base));
    });

    let output = log.contents();
    assert_eq!(output.matches("Bundling for development...").count(), 2);
    assert_eq!(output.matches("Bundling for production...").count(), 1);
}

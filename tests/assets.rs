use crate::helpers::lookup_from;
use pdf_analyzer::{
    assets::{DEFAULT_WORKER_SOURCE, PDF_WORKER_FILE, WorkerAsset, is_worker_installed},
    error::AppError,
};
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn run_copy_pdf_worker(source: &Path, public_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_copy-pdf-worker"))
        .env("PDF_WORKER_SOURCE", source)
        .env("PUBLIC_DIR", public_dir)
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()
        .expect("copy-pdf-worker should start")
}

#[test]
fn test_paths_from_environment() {
    let asset = WorkerAsset::from_lookup(|_| None);
    assert_eq!(asset, WorkerAsset::default());
    assert_eq!(asset.source, PathBuf::from(DEFAULT_WORKER_SOURCE));
    assert_eq!(asset.destination(), PathBuf::from("public").join(PDF_WORKER_FILE));

    let asset = WorkerAsset::from_lookup(lookup_from(&[
        ("PDF_WORKER_SOURCE", "vendor/pdf.worker.min.mjs"),
        ("PUBLIC_DIR", " static "),
    ]));
    assert_eq!(asset.source, PathBuf::from("vendor/pdf.worker.min.mjs"));
    assert_eq!(asset.destination_dir, PathBuf::from("static"));
}

#[tokio::test]
async fn test_install_creates_missing_directory() {
    let dir = tempfile::tempdir().expect("Creating a temp dir should not fail");
    let source = dir.path().join("build").join(PDF_WORKER_FILE);
    fs::create_dir_all(source.parent().expect("Source has a parent")).expect("mkdir");
    fs::write(&source, "export const worker = 1;").expect("write source");

    let public = dir.path().join("nested").join("public");
    let asset = WorkerAsset::new(&source, &public);
    let written = asset.install().await.expect("Install should succeed");

    assert_eq!(written, public.join(PDF_WORKER_FILE));
    assert_eq!(
        fs::read_to_string(&written).expect("read copy"),
        "export const worker = 1;"
    );
}

#[tokio::test]
async fn test_install_overwrites_existing_copy() {
    let dir = tempfile::tempdir().expect("Creating a temp dir should not fail");
    let source = dir.path().join(PDF_WORKER_FILE);
    fs::write(&source, "new").expect("write source");
    let public = dir.path().join("public");
    fs::create_dir_all(&public).expect("mkdir");
    fs::write(public.join(PDF_WORKER_FILE), "old").expect("write stale copy");

    let written = WorkerAsset::new(&source, &public)
        .install()
        .await
        .expect("Install should succeed");

    assert_eq!(fs::read_to_string(written).expect("read copy"), "new");
}

#[tokio::test]
async fn test_missing_source_is_propagated() {
    let dir = tempfile::tempdir().expect("Creating a temp dir should not fail");
    let source = dir.path().join("missing").join(PDF_WORKER_FILE);
    let public = dir.path().join("public");

    let err = WorkerAsset::new(&source, &public)
        .install()
        .await
        .expect_err("Missing source must fail");

    assert!(matches!(
        err,
        AppError::CopyAsset { ref from, ref source, .. }
            if *from == dir.path().join("missing").join(PDF_WORKER_FILE)
                && source.kind() == std::io::ErrorKind::NotFound
    ));
    assert!(public.is_dir(), "Directory is created before the copy");
}

#[tokio::test]
async fn test_destination_dir_blocked_by_file() {
    let dir = tempfile::tempdir().expect("Creating a temp dir should not fail");
    let source = dir.path().join(PDF_WORKER_FILE);
    fs::write(&source, "worker").expect("write source");
    let blocker = dir.path().join("public");
    fs::write(&blocker, "not a directory").expect("write blocker");

    let err = WorkerAsset::new(&source, &blocker)
        .install()
        .await
        .expect_err("A file in place of the directory must fail");

    assert!(matches!(err, AppError::CreateDir { ref path, .. } if *path == blocker));
}

#[tokio::test]
async fn test_is_worker_installed() {
    let dir = tempfile::tempdir().expect("Creating a temp dir should not fail");
    assert!(!is_worker_installed(dir.path()).await);

    fs::create_dir(dir.path().join(PDF_WORKER_FILE)).expect("mkdir");
    assert!(
        !is_worker_installed(dir.path()).await,
        "A directory with the worker's name is not an installed worker"
    );

    let public = dir.path().join("public");
    fs::create_dir(&public).expect("mkdir");
    fs::write(public.join(PDF_WORKER_FILE), "worker").expect("write worker");
    assert!(is_worker_installed(&public).await);
}

#[test]
fn test_copy_pdf_worker_fails_on_missing_source() {
    let dir = tempfile::tempdir().expect("Creating a temp dir should not fail");
    let public = dir.path().join("public");

    let output = run_copy_pdf_worker(&dir.path().join("missing.mjs"), &public);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[copy-pdf-worker] failed to install the PDF worker"),
        "stderr: {stderr}"
    );
    assert!(!public.join(PDF_WORKER_FILE).exists());
}

#[test]
fn test_copy_pdf_worker_installs_and_logs() {
    let dir = tempfile::tempdir().expect("Creating a temp dir should not fail");
    let source = dir.path().join(PDF_WORKER_FILE);
    fs::write(&source, "export default {};").expect("write source");
    let public = dir.path().join("public");

    let output = run_copy_pdf_worker(&source, &public);

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(
        fs::read_to_string(public.join(PDF_WORKER_FILE)).expect("read copy"),
        "export default {};"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[copy-pdf-worker] Copied"), "stdout: {stdout}");
}

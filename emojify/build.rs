#[cfg(feature = "integrated")]
#[allow(dead_code)]
#[path = "./src/record.rs"]
mod record;

#[cfg(feature = "dict-autodownload")]
async fn download() -> Result<String, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?
        .get(record::DOWNLOAD_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

#[cfg(feature = "integrated")]
fn main() {
    const DATA_PATH: &str = "./data/emoji.json";
    const SAMPLE_PATH: &str = "./data/emoji.sample.json";

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/record.rs");
    println!("cargo:rerun-if-changed={DATA_PATH}");
    println!("cargo:rerun-if-changed={SAMPLE_PATH}");

    #[cfg(feature = "dict-autodownload")]
    if !std::path::Path::new(DATA_PATH).exists() {
        let downloaded = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(download());

        match downloaded {
            Ok(data) => std::fs::write(DATA_PATH, data).unwrap(),
            Err(e) => println!(
                "cargo:warning=Could not download emoji data from {}: {e}; embedding {SAMPLE_PATH}",
                record::DOWNLOAD_URL
            ),
        }
    }

    let data_path = if std::path::Path::new(DATA_PATH).exists() {
        DATA_PATH
    } else {
        SAMPLE_PATH
    };

    // malformed data fails the build
    let records = record::from_path(data_path)
        .unwrap_or_else(|e| panic!("Failed to load emoji data from {data_path}: {e}"));

    let out_path =
        std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("emoji.bin");
    std::fs::write(out_path, bincode::serialize(&records).unwrap()).unwrap();
}

#[cfg(not(feature = "integrated"))]
fn main() {}

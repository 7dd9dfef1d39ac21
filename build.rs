use std::env;

fn main() {
    // Tauriのビルドスクリプトを実行（デスクトップビルドのみ）
    #[cfg(feature = "desktop")]
    tauri_build::build();

    // ENVIRONMENT環境変数に基づいて適切な.envファイルを読み込み
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    let env_file = match environment.as_str() {
        "production" => ".env.production",
        _ => ".env",
    };

    println!("cargo:rerun-if-env-changed=ENVIRONMENT");
    println!("cargo:rerun-if-changed={env_file}");

    if dotenv::from_filename(env_file).is_ok() {
        // 外部連携のタイムアウトのみコンパイル時定数として埋め込み
        if let Ok(timeout) = env::var("ENRICHMENT_TIMEOUT_SECS") {
            println!("cargo:rustc-env=EMBEDDED_ENRICHMENT_TIMEOUT_SECS={timeout}");
        }

        // 注意: EMBEDDED_ENVIRONMENTは設定しない
        // 実行時に.envファイルから環境変数を読み込むため
    }
}

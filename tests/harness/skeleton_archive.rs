//! In-memory release archives shaped like the published skeleton.

use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};

pub(crate) const ENV_TEMPLATE: &str = "APP_NAME=LaraPress
APP_ENV=local
APP_KEY=
APP_DEBUG=true
APP_URL=http://localhost

DB_CONNECTION=mysql
DB_HOST=127.0.0.1
DB_PORT=3306
DB_DATABASE=larapress
DB_USERNAME=root
DB_PASSWORD=secret

MAIL_MAILER=smtp
";

pub(crate) const MANIFEST: &str = r#"{
    "name": "lara-press/larapress",
    "type": "project",
    "require": {
        "php": "^8.1",
        "guzzlehttp/guzzle": "^7.2"
    },
    "extra": {
        "laravel": {
            "dont-discover": []
        }
    },
    "minimum-stability": "stable"
}
"#;

/// Zip bytes containing the skeleton files the installer touches.
pub(crate) fn skeleton_zip() -> Vec<u8> {
    build_zip(&[
        (".env.example", ENV_TEMPLATE),
        ("composer.json", MANIFEST),
        ("composer.lock", "{\"packages\": []}"),
        ("artisan", "<?php\n"),
        ("bootstrap/cache/.gitignore", "*\n!.gitignore\n"),
        ("storage/logs/.gitignore", "*\n!.gitignore\n"),
    ])
}

pub(crate) fn build_zip(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in files {
        writer.start_file(*name, SimpleFileOptions::default()).expect("Failed to start zip entry");
        writer.write_all(content.as_bytes()).expect("Failed to write zip entry");
    }
    writer.finish().expect("Failed to finish zip").into_inner()
}

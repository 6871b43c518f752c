use crate::catalog::loader::{self, CatalogLoadError, CatalogSource};
use crate::catalog::models::{Image, LatLng};
use crate::catalog::responses::CatalogStatusResponse;
use crate::catalog::Catalog;
use crate::cli::tests::fake_args;
use crate::http::tests::{test_server, test_server_with};
use std::path::PathBuf;
use std::str::FromStr;

pub fn fake_images() -> Vec<Image> {
    vec![
        Image {
            title: String::from("OIC Library Front"),
            description: String::from("Entrance of the library."),
            url: String::from("/images/guess/panorama/p6.jpeg"),
            is_panorama: true,
            coordinate: LatLng {
                lat: 34.8100662,
                lng: 135.5620985,
            },
            floor: 2,
            haov: 240.0,
            vaov: 75.0,
        },
        Image {
            title: String::from("OIC Cafeteria"),
            description: String::from("Lunch place."),
            url: String::from("/images/guess/panorama/p9.jpeg"),
            is_panorama: true,
            coordinate: LatLng {
                lat: 34.8100871,
                lng: 135.5615275,
            },
            floor: 1,
            haov: 240.0,
            vaov: 75.0,
        },
        Image {
            title: String::from("Outside"),
            description: String::from("Open space near building H."),
            url: String::from("/images/guess/flat/f1.jpeg"),
            is_panorama: false,
            coordinate: LatLng {
                lat: 34.80898639844242,
                lng: 135.562220669336,
            },
            floor: 1,
            haov: 360.0,
            vaov: 180.0,
        },
    ]
}

#[test]
fn parses_json_array() {
    let text = r#"[
        {
            "title": "Machi Library OIC",
            "description": "Community library.",
            "url": "/images/guess/panorama/p8.jpeg",
            "isPanorama": true,
            "coordinate": {"lat": 34.8100789, "lng": 135.5625474},
            "floor": 1,
            "haov": 240,
            "vaov": 75
        }
    ]"#;
    let images = loader::parse(text).unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].title, "Machi Library OIC");
    assert!(images[0].is_panorama);
    assert_eq!(images[0].floor, 1);
    assert_eq!(images[0].haov, 240.0);
}

#[test]
fn parses_ndjson_and_fills_defaults() {
    let text = "\
{\"title\": \"A\", \"url\": \"/a.jpeg\", \"coordinate\": {\"lat\": 1.0, \"lng\": 2.0}, \"floor\": 3}

{\"title\": \"B\", \"url\": \"/b.jpeg\", \"coordinate\": {\"lat\": 3.0, \"lng\": 4.0}, \"floor\": -1}
";
    let images = loader::parse(text).unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[1].floor, -1);
    assert!(!images[0].is_panorama);
    assert_eq!(images[0].description, "");
    assert_eq!(images[0].haov, 360.0);
    assert_eq!(images[0].vaov, 180.0);
}

#[test]
fn reports_broken_ndjson_line() {
    let text = "{\"title\": \"A\", \"url\": \"/a\", \"coordinate\": {\"lat\": 1.0, \"lng\": 2.0}, \"floor\": 1}\nnope\n";
    match loader::parse(text) {
        Err(CatalogLoadError::NdjsonLine { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn source_is_url_only_for_http_schemes() {
    assert!(matches!(
        CatalogSource::from_str("https://example.com/images.json"),
        Ok(CatalogSource::Url(_))
    ));
    assert_eq!(
        CatalogSource::from_str("data/images.ndjson").unwrap(),
        CatalogSource::File(PathBuf::from("data/images.ndjson"))
    );
}

#[tokio::test]
async fn missing_file_loads_as_empty_catalog() {
    let source = CatalogSource::File(PathBuf::from("this/file/does/not/exist.json"));
    assert!(matches!(
        loader::try_load(&source).await,
        Err(CatalogLoadError::Io { .. })
    ));
    assert!(loader::load(&source).await.is_empty());
}

#[tokio::test]
async fn loads_catalog_from_file() {
    let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
    let text = serde_json::to_string(&fake_images()).unwrap();
    tokio::fs::write(&path, text).await.unwrap();

    let catalog = loader::load(&CatalogSource::File(path.clone())).await;
    let _ = tokio::fs::remove_file(&path).await;

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.images(), fake_images().as_slice());
}

#[tokio::test]
async fn test_catalog_status() {
    let server = test_server();

    let response = server.get("/catalog/status").await;

    response.assert_status_ok();
    response.assert_json(&CatalogStatusResponse {
        error: false,
        images_count: 3,
    });
}

#[tokio::test]
async fn test_empty_catalog_status() {
    let server = test_server_with(Catalog::default());

    let response = server.get("/catalog/status").await;

    response.assert_json(&CatalogStatusResponse {
        error: false,
        images_count: 0,
    });
}

#[tokio::test]
async fn bundled_example_catalog_loads() {
    let catalog = loader::load(&fake_args().catalog).await;
    assert_eq!(catalog.len(), 10);
    assert!(catalog.images().iter().all(|image| image.is_panorama));
}

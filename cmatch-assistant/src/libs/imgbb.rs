//! Client of the image hosting service.
//!
//! The host accepts a `multipart/form-data` POST with an API key and returns a public URL of the
//! stored image. That URL is what the catalog visual search receives; raw bytes never reach the
//! catalog API.

use std::{
    error::Error as StdError,
    io::{Error as IoError, ErrorKind},
};

use reqwest::{
    multipart::{Form, Part},
    Client,
};
use serde::Deserialize;

/// Options of the image host.
#[derive(Clone)]
pub struct ImgbbOptions {
    /// The upload endpoint.
    pub url: String,
    /// The API key sent with every upload.
    pub key: String,
}

/// Upload response of the image host.
#[derive(Deserialize)]
struct UploadRes {
    status_code: u64,
    image: Option<UploadResImage>,
}

#[derive(Deserialize)]
struct UploadResImage {
    url: String,
}

/// To upload one image and get its public URL.
pub async fn upload_image(
    client: &Client,
    opts: &ImgbbOptions,
    data: Vec<u8>,
    name: Option<String>,
) -> Result<String, Box<dyn StdError>> {
    let part = match Part::bytes(data)
        .file_name("image.jpg")
        .mime_str("image/jpeg")
    {
        Err(e) => return Err(Box::new(e)),
        Ok(part) => part,
    };
    let mut form = Form::new()
        .text("key", opts.key.clone())
        .text("action", "upload")
        .text("format", "json")
        .part("source", part);
    if let Some(name) = name {
        form = form.text("name", name);
    }

    let resp = client
        .post(opts.url.as_str())
        .multipart(form)
        .send()
        .await?;
    let status = resp.status();
    if !status.is_success() {
        let e = IoError::new(
            ErrorKind::InvalidData,
            format!("image host responded status {}", status.as_u16()),
        );
        return Err(Box::new(e));
    }
    let body = resp.json::<UploadRes>().await?;
    if body.status_code != 200 {
        let e = IoError::new(
            ErrorKind::InvalidData,
            format!("image host rejected the upload with {}", body.status_code),
        );
        return Err(Box::new(e));
    }
    match body.image {
        None => Err(Box::new(IoError::new(
            ErrorKind::InvalidData,
            "image host returned no image URL",
        ))),
        Some(image) => Ok(image.url),
    }
}

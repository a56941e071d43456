//! Shared test transport: serves canned bodies and records every request.

#![allow(dead_code)]

use std::cell::RefCell;

use nova_extract::{Error, Fetcher, Request, Result};

/// Canned response for every request.
pub struct StaticFetcher {
    body: std::result::Result<String, String>,
    requests: RefCell<Vec<Request>>,
}

impl StaticFetcher {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: Ok(body.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            body: Err(message.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn only_request(&self) -> Request {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one fetch, got {requests:?}");
        requests[0].clone()
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, request: &Request) -> Result<String> {
        self.requests.borrow_mut().push(request.clone());
        match &self.body {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(Error::transport(message.clone())),
        }
    }
}

/// A Cloudflare "Just a moment..." holding page.
pub const CHALLENGE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-US"><head><title>Just a moment...</title></head>
<body><div id="content">Nadie entra sin permiso en la Gran Tumba de Nazarick</div>
<h1>Overlord</h1>
<div class="dt-css-grid"><div class="wf-cell"><h4 class="entry-title"><a href="/x/">X</a></h4></div></div>
</body></html>"#;

/// A novel page with two volumes, a non-volume block and full metadata.
pub const NOVEL_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Overlord – Novelas Ligeras</title></head>
<body>
<h1 class="product_title entry-title">Overlord</h1>
<div class="woocommerce-product-gallery">
  <figure><img src="https://novelasligeras.net/wp-content/uploads/overlord.jpg" data-src="lazy.jpg"></figure>
</div>
<div class="woocommerce-product-details__short-description"><p>El <em>juego</em> termina.</p></div>
<table class="woocommerce-product-attributes">
  <tr class="woocommerce-product-attributes-item--attribute_pa_escritor"><th>Escritor</th><td>Maruyama Kugane</td></tr>
  <tr class="woocommerce-product-attributes-item--attribute_pa_ilustrador"><th>Ilustrador</th><td>so-bin</td></tr>
</table>
<div class="vc_row wpb_row">
  <div class="wpb_column vc_column_container"><div class="vc_column-inner"><div class="wpb_wrapper">
    <div class="dt-fancy-title">Resources</div>
    <div class="wpb_tabs"><div class="wpb_tab"><a href="https://novelasligeras.net/index.php/glosario/">Parte 1 - Glosario: Todo</a></div></div>
  </div></div></div>
  <div class="wpb_column vc_column_container"><div class="vc_column-inner"><div class="wpb_wrapper">
    <div class="dt-fancy-title">Volumen 1</div>
    <div class="wpb_tabs">
      <div class="wpb_tab">
        <a href="https://novelasligeras.net/index.php/2017/01/01/overlord-v1-p1/">Parte 1 - Capítulo 1: El fin y el comienzo</a>
        <a href="https://novelasligeras.net/index.php/2017/01/02/overlord-v1-p2/">Parte 2 - Capítulo 1: El fin y el comienzo</a>
      </div>
      <div class="wpb_tab">
        <a href="https://novelasligeras.net/index.php/2017/01/03/overlord-v1-extra/">Extra</a>
      </div>
    </div>
  </div></div></div>
</div>
<div class="vc_row wpb_row">
  <div class="wpb_column vc_column_container"><div class="vc_column-inner"><div class="wpb_wrapper">
    <div class="dt-fancy-title">Volumen 2</div>
    <div class="wpb_tabs"><div class="wpb_tab">
      <a href="https://novelasligeras.net/index.php/2017/02/01/overlord-v2-p1/">Parte 1 – Capítulo 1: Dos aventureros</a>
    </div></div>
  </div></div></div>
</div>
</body></html>"#;

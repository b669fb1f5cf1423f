use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::config::Config;
use crate::domain::{Catalog, Offer, Shop};
use crate::errors::{PricefeedError, PricefeedResult};
use crate::sources::traits::CatalogSource;

/// Fetches YML price catalogs over HTTP and parses them into a [`Catalog`].
pub struct YmlCatalogSource {
    client: Client,
}

impl YmlCatalogSource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
                .user_agent(config.user_agent.clone())
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_text(&self, url: &str) -> PricefeedResult<String> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/xml")
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }
}

impl CatalogSource for YmlCatalogSource {
    fn fetch_catalog(&self, url: &str) -> PricefeedResult<Catalog> {
        let xml = self.fetch_text(url)?;
        parse_catalog(&xml)
    }
}

#[derive(Default)]
struct OfferFields {
    vendor: String,
    vendor_code: String,
    name: String,
    price: String,
    currency_id: String,
}

impl OfferFields {
    fn build(self) -> Offer {
        let vendor_code = if self.vendor_code.is_empty() {
            None
        } else {
            Some(self.vendor_code)
        };

        // A missing or malformed price coerces to 0.0 rather than dropping
        // the offer.
        let price = self.price.trim().parse::<f64>().unwrap_or(0.0);

        Offer::new(self.vendor, self.name, price, self.currency_id).with_vendor_code(vendor_code)
    }
}

/// Parse a YML catalog document (`/yml_catalog/shop/offers/offer`) into the
/// shop/offer tree. Documents with no shops parse to an empty catalog;
/// malformed XML is an error.
pub fn parse_catalog(xml: &str) -> PricefeedResult<Catalog> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut shops = Vec::new();
    let mut shop_name = String::new();
    let mut shop_offers: Vec<Offer> = Vec::new();
    let mut in_offers = false;
    let mut in_offer = false;
    let mut current_tag = String::new();
    let mut offer = OfferFields::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                match name.as_str() {
                    "shop" => {
                        shop_name.clear();
                        shop_offers = Vec::new();
                    }
                    "offers" => in_offers = true,
                    "offer" => {
                        in_offer = true;
                        offer = OfferFields::default();
                    }
                    _ => current_tag = name,
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                match name.as_str() {
                    "offer" if in_offer => {
                        shop_offers.push(std::mem::take(&mut offer).build());
                        in_offer = false;
                    }
                    "offers" => in_offers = false,
                    "shop" => shops.push(Shop {
                        name: shop_name.clone(),
                        offers: std::mem::take(&mut shop_offers),
                    }),
                    _ => current_tag.clear(),
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                if in_offer {
                    match current_tag.as_str() {
                        "vendor" => offer.vendor = text,
                        "vendorCode" => offer.vendor_code = text,
                        "name" => offer.name = text,
                        "price" => offer.price = text,
                        "currencyId" => offer.currency_id = text,
                        _ => {}
                    }
                } else if !in_offers && current_tag == "name" {
                    shop_name = text;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(PricefeedError::CatalogParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(Catalog { shops })
}

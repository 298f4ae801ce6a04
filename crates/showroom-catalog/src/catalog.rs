//! Data access: one function per entity and query shape.

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde_json::Value;
use showroom_content::{ContentApi, ContentError, ObjectQuery};
use showroom_observability::{FetchOutcome, FetchRecorder, StructuredLogger};

use crate::error::CatalogError;
use crate::record::{Brand, Car, Dealership, Object, BRANDS, CARS, DEALERSHIPS};

/// Fields requested by list queries.
pub const LIST_PROPS: &[&str] = &["id", "title", "slug", "type", "metadata"];

/// Typed access to cars, brands and dealerships.
///
/// Not-found becomes an empty list or `None`; any other failure is a
/// [`CatalogError`]. Every call is logged and, when a recorder is
/// attached, timed into the request metrics.
#[derive(Clone, Copy)]
pub struct Catalog<'a> {
    api: &'a dyn ContentApi,
    logger: &'a StructuredLogger,
    recorder: Option<&'a FetchRecorder>,
}

impl<'a> Catalog<'a> {
    pub fn new(api: &'a dyn ContentApi, logger: &'a StructuredLogger) -> Self {
        Self {
            api,
            logger,
            recorder: None,
        }
    }

    /// Record fetch timings into `recorder`.
    pub fn with_recorder(mut self, recorder: &'a FetchRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn logger(&self) -> &'a StructuredLogger {
        self.logger
    }

    // === Cars ===

    pub async fn cars(&self) -> Result<Vec<Car>, CatalogError> {
        self.list(CARS.to_string(), list_query(CARS).depth(1)).await
    }

    pub async fn available_cars(&self) -> Result<Vec<Car>, CatalogError> {
        let query = list_query(CARS).filter("metadata.available", true).depth(1);
        let cars: Vec<Car> = self.list("available cars".to_string(), query).await?;
        Ok(cars.into_iter().filter(|car| car.metadata.available).collect())
    }

    pub async fn car(&self, slug: &str) -> Result<Option<Car>, CatalogError> {
        let query = ObjectQuery::of_type(CARS).slug(slug).depth(1);
        self.single(format!("car {slug}"), query).await
    }

    /// Cars whose brand reference points at `brand_id`.
    pub async fn cars_by_brand(&self, brand_id: &str) -> Result<Vec<Car>, CatalogError> {
        let query = list_query(CARS).filter("metadata.brand", brand_id).depth(1);
        let cars: Vec<Car> = self.list(format!("cars for brand {brand_id}"), query).await?;
        Ok(cars
            .into_iter()
            .filter(|car| {
                car.metadata
                    .brand
                    .as_ref()
                    .is_some_and(|brand| brand.points_to(brand_id))
            })
            .collect())
    }

    /// Cars whose dealership reference points at `dealership_id`.
    pub async fn cars_by_dealership(&self, dealership_id: &str) -> Result<Vec<Car>, CatalogError> {
        let query = list_query(CARS)
            .filter("metadata.dealership", dealership_id)
            .depth(1);
        let cars: Vec<Car> = self
            .list(format!("cars for dealership {dealership_id}"), query)
            .await?;
        Ok(cars
            .into_iter()
            .filter(|car| {
                car.metadata
                    .dealership
                    .as_ref()
                    .is_some_and(|dealership| dealership.points_to(dealership_id))
            })
            .collect())
    }

    // === Brands ===

    pub async fn brands(&self) -> Result<Vec<Brand>, CatalogError> {
        self.list(BRANDS.to_string(), list_query(BRANDS)).await
    }

    pub async fn brand(&self, slug: &str) -> Result<Option<Brand>, CatalogError> {
        let query = ObjectQuery::of_type(BRANDS).slug(slug);
        self.single(format!("brand {slug}"), query).await
    }

    // === Dealerships ===

    pub async fn dealerships(&self) -> Result<Vec<Dealership>, CatalogError> {
        self.list(DEALERSHIPS.to_string(), list_query(DEALERSHIPS).depth(1))
            .await
    }

    pub async fn dealership(&self, slug: &str) -> Result<Option<Dealership>, CatalogError> {
        let query = ObjectQuery::of_type(DEALERSHIPS).slug(slug).depth(1);
        self.single(format!("dealership {slug}"), query).await
    }

    // === Plumbing ===

    async fn list<M: DeserializeOwned>(
        &self,
        entity: String,
        query: ObjectQuery,
    ) -> Result<Vec<Object<M>>, CatalogError> {
        let started = Instant::now();
        let result = self.api.find(&query).await;
        let elapsed = started.elapsed();

        match result {
            Ok(page) => {
                let received = page.objects.len();
                let records: Vec<Object<M>> = page
                    .objects
                    .into_iter()
                    .filter_map(|value| self.decode_listed(&entity, value))
                    .collect();
                self.fetched(&entity, elapsed, records.len(), received - records.len());
                Ok(records)
            }
            Err(ContentError::NotFound) => {
                self.not_found(&entity, elapsed);
                Ok(Vec::new())
            }
            Err(source) => Err(self.failed(entity, elapsed, source)),
        }
    }

    async fn single<M: DeserializeOwned>(
        &self,
        entity: String,
        query: ObjectQuery,
    ) -> Result<Option<Object<M>>, CatalogError> {
        let started = Instant::now();
        let result = self.api.find_one(&query).await;
        let elapsed = started.elapsed();

        match result {
            Ok(value) => match serde_json::from_value::<Object<M>>(value) {
                Ok(record) => {
                    self.fetched(&entity, elapsed, 1, 0);
                    Ok(Some(record))
                }
                Err(e) => {
                    let message = e.to_string();
                    self.record(&entity, elapsed, FetchOutcome::Failed {
                        error: message.clone(),
                    });
                    self.logger
                        .error_builder("content record invalid")
                        .field("entity", entity.as_str())
                        .field("error", message.as_str())
                        .emit();
                    Err(CatalogError::Decode { entity, message })
                }
            },
            Err(ContentError::NotFound) => {
                self.not_found(&entity, elapsed);
                Ok(None)
            }
            Err(source) => Err(self.failed(entity, elapsed, source)),
        }
    }

    fn decode_listed<M: DeserializeOwned>(&self, entity: &str, value: Value) -> Option<Object<M>> {
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string();
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                self.logger
                    .warn_builder("skipping invalid record")
                    .field("entity", entity)
                    .field("id", id)
                    .field("error", e.to_string())
                    .emit();
                None
            }
        }
    }

    fn fetched(&self, entity: &str, elapsed: Duration, count: usize, skipped: usize) {
        self.record(entity, elapsed, FetchOutcome::Found { count });
        self.logger
            .debug_builder("content fetched")
            .field("entity", entity)
            .field_usize("count", count)
            .field_usize("skipped", skipped)
            .duration_ms("elapsed_ms", elapsed)
            .emit();
    }

    fn not_found(&self, entity: &str, elapsed: Duration) {
        self.record(entity, elapsed, FetchOutcome::NotFound);
        self.logger
            .debug_builder("content not found")
            .field("entity", entity)
            .duration_ms("elapsed_ms", elapsed)
            .emit();
    }

    fn failed(&self, entity: String, elapsed: Duration, source: ContentError) -> CatalogError {
        self.record(&entity, elapsed, FetchOutcome::Failed {
            error: source.to_string(),
        });
        self.logger
            .error_builder("content fetch failed")
            .field("entity", entity.as_str())
            .field("error", source.to_string())
            .duration_ms("elapsed_ms", elapsed)
            .emit();
        CatalogError::Fetch { entity, source }
    }

    fn record(&self, entity: &str, elapsed: Duration, outcome: FetchOutcome) {
        if let Some(recorder) = self.recorder {
            recorder.record(entity, elapsed, outcome);
        }
    }
}

fn list_query(object_type: &str) -> ObjectQuery {
    ObjectQuery::of_type(object_type).props(LIST_PROPS)
}

use std::fmt;
use std::time::Duration;
use log::debug;
use ureq::{Agent, Error};
use crate::base_time::BaseParams;
use crate::models::kma_forecast::{Envelope, ForecastRecord, Header};

#[derive(Debug)]
pub enum KmaError {
    Http(String),
    Api(String),
    Document(String),
}

impl fmt::Display for KmaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KmaError::Http(e) => write!(f, "KmaError::Http: {}", e),
            KmaError::Api(e) => write!(f, "KmaError::Api: {}", e),
            KmaError::Document(e) => write!(f, "KmaError::Document: {}", e),
        }
    }
}
impl From<Error> for KmaError {
    fn from(e: Error) -> Self {
        KmaError::Http(e.to_string())
    }
}
impl From<serde_json::Error> for KmaError {
    fn from(e: serde_json::Error) -> Self {
        KmaError::Document(e.to_string())
    }
}

/// Struct for managing village forecast requests against the KMA open API
pub struct Kma {
    agent: Agent,
    service_key: String,
    num_of_rows: u32,
}

impl Kma {
    /// Returns a Kma struct ready for fetching village forecasts
    ///
    /// # Arguments
    ///
    /// * 'service_key' - the static API key issued by data.go.kr
    /// * 'num_of_rows' - number of records to request per call
    pub fn new(service_key: String, num_of_rows: u32) -> Kma {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self { agent, service_key, num_of_rows }
    }

    /// Retrieves the full response envelope for one forecast cycle and grid
    /// point. Transport failures, non-success HTTP statuses and malformed
    /// documents surface as errors; the API result code is left to the
    /// caller since the raw probe wants to display non-success headers too.
    ///
    /// # Arguments
    ///
    /// * 'base' - the forecast cycle to request
    /// * 'nx' - grid x coordinate
    /// * 'ny' - grid y coordinate
    fn request(&self, base: &BaseParams, nx: u32, ny: u32) -> Result<Envelope, KmaError> {
        let kma_domain = "https://apis.data.go.kr";
        let base_url = "/1360000/VilageFcstInfoService_2.0/getVilageFcst";
        let url = format!("{}{}", kma_domain, base_url);

        debug!("requesting base_date={} base_time={} nx={} ny={}",
               base.base_date, base.base_time, nx, ny);

        let json = self.agent
            .get(&url)
            .query("serviceKey", &self.service_key)
            .query("pageNo", "1")
            .query("numOfRows", &self.num_of_rows.to_string())
            .query("dataType", "JSON")
            .query("base_date", &base.base_date)
            .query("base_time", &base.base_time)
            .query("nx", &nx.to_string())
            .query("ny", &ny.to_string())
            .call()?
            .body_mut()
            .read_to_string()?;

        let envelope: Envelope = serde_json::from_str(&json)?;

        Ok(envelope)
    }

    /// Retrieves the flat forecast records for one forecast cycle and grid
    /// point. Any response with a result code other than "00" is treated as
    /// a failure and discarded as a whole.
    ///
    /// # Arguments
    ///
    /// * 'base' - the forecast cycle to request
    /// * 'nx' - grid x coordinate
    /// * 'ny' - grid y coordinate
    pub fn get_forecast(&self, base: &BaseParams, nx: u32, ny: u32)
                        -> Result<Vec<ForecastRecord>, KmaError> {
        let envelope = self.request(base, nx, ny)?;

        validate(envelope)
    }

    /// Retrieves the response header and whatever records came with it for
    /// one forecast cycle and grid point, without failing on a non-success
    /// result code. Meant for probing the API with explicit request
    /// parameters.
    ///
    /// # Arguments
    ///
    /// * 'base' - the forecast cycle to request
    /// * 'nx' - grid x coordinate
    /// * 'ny' - grid y coordinate
    pub fn probe(&self, base: &BaseParams, nx: u32, ny: u32)
                 -> Result<(Header, Vec<ForecastRecord>), KmaError> {
        let envelope = self.request(base, nx, ny)?;

        let records = envelope.response.body
            .and_then(|b| b.items)
            .map(|i| i.item.into_vec())
            .unwrap_or_default();

        Ok((envelope.response.header, records))
    }
}

/// Checks the result code and document structure of a response envelope and
/// extracts the flat records
///
/// # Arguments
///
/// * 'envelope' - the deserialized response
fn validate(envelope: Envelope) -> Result<Vec<ForecastRecord>, KmaError> {
    let header = envelope.response.header;
    if header.result_code != "00" {
        return Err(KmaError::Api(
            format!("{} ({})", header.result_msg, header.result_code)));
    }

    let items = envelope.response.body
        .and_then(|b| b.items)
        .ok_or_else(|| KmaError::Document("missing items in response body".to_string()))?;

    Ok(items.item.into_vec())
}

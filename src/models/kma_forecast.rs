use serde::Deserialize;

/// One flat forecast unit as delivered by the KMA API, i.e. a single
/// (date, time, category, value) record
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ForecastRecord {
    #[serde(rename = "fcstDate")]
    pub fcst_date: String,
    #[serde(rename = "fcstTime")]
    pub fcst_time: String,
    pub category: String,
    #[serde(rename = "fcstValue")]
    pub fcst_value: String,
}

#[derive(Deserialize, Debug)]
pub struct Header {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg")]
    pub result_msg: String,
}

/// The item field comes as an array of records, except when the page holds a
/// single record in which case the API flattens it to a bare object
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ItemField {
    Many(Vec<ForecastRecord>),
    One(Box<ForecastRecord>),
}

impl ItemField {
    pub fn into_vec(self) -> Vec<ForecastRecord> {
        match self {
            ItemField::Many(records) => records,
            ItemField::One(record) => vec![*record],
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Items {
    pub item: ItemField,
}

#[derive(Deserialize, Debug)]
pub struct Body {
    pub items: Option<Items>,
}

#[derive(Deserialize, Debug)]
pub struct Response {
    pub header: Header,
    pub body: Option<Body>,
}

#[derive(Deserialize, Debug)]
pub struct Envelope {
    pub response: Response,
}

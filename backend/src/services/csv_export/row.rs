//! One synthetic CSV record and its serialization.
//!
//! `DataRow` is filled by the `fake` crate through its `Dummy` derive; the
//! sequential ID is not part of the row and is supplied by the caller when the
//! row is written.

use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, SecondaryAddress, StateAbbr, StateName, StreetName,
    ZipCode,
};
use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use common::model::csv::{CSV_COLUMNS, QUOTED_COLUMNS};
use fake::Dummy;
use std::borrow::Cow;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Dummy)]
pub struct DataRow {
    #[dummy(faker = "FirstName()")]
    pub first_name: String,
    #[dummy(faker = "LastName()")]
    pub last_name: String,
    #[dummy(faker = "PhoneNumber()")]
    pub phone: String,
    #[dummy(faker = "CountryName()")]
    pub country: String,
    #[dummy(faker = "CityName()")]
    pub city: String,
    #[dummy(faker = "StreetName()")]
    pub street: String,
    #[dummy(faker = "BuildingNumber()")]
    pub building_number: String,
    #[dummy(faker = "SecondaryAddress()")]
    pub secondary_address: String,
    #[dummy(faker = "ZipCode()")]
    pub zip_code: String,
    #[dummy(faker = "StateName()")]
    pub state: String,
    #[dummy(faker = "StateAbbr()")]
    pub state_abbr: String,
    #[dummy(faker = "-90.0..90.0")]
    pub lat: f64,
    #[dummy(faker = "-180.0..180.0")]
    pub lng: f64,
    #[dummy(faker = "Sentence(3..8)")]
    pub description: String,
    #[dummy(faker = "Word()")]
    pub domain: String,
    #[dummy(faker = "DomainSuffix()")]
    pub domain_suffix: String,
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
}

impl DataRow {
    /// Values of every column after `ID`, in `CSV_COLUMNS` order.
    fn values(&self) -> [Cow<'_, str>; 16] {
        [
            format!("{} {}", self.first_name, self.last_name).into(),
            self.phone.as_str().into(),
            self.country.as_str().into(),
            self.city.as_str().into(),
            self.street.as_str().into(),
            format!(
                "{} {}, {} {}",
                self.building_number, self.street, self.city, self.zip_code
            )
            .into(),
            format!("{} {}", self.building_number, self.street).into(),
            self.secondary_address.as_str().into(),
            self.state.as_str().into(),
            self.state_abbr.as_str().into(),
            format!("{:.8}", self.lat).into(),
            format!("{:.8}", self.lng).into(),
            self.building_number.as_str().into(),
            self.description.as_str().into(),
            format!(
                "http://www.{}.{}",
                self.domain.to_lowercase(),
                self.domain_suffix
            )
            .into(),
            self.email.as_str().into(),
        ]
    }

    /// Append the row as one CSV line (with trailing `\n`) to `out`.
    ///
    /// Columns listed in `QUOTED_COLUMNS` are always quoted. Every other
    /// value is quoted only when it would otherwise break the framing.
    pub fn write_line(&self, id: u64, out: &mut String) -> fmt::Result {
        write!(out, "{}", id)?;
        for (column, value) in CSV_COLUMNS[1..].iter().zip(self.values()) {
            out.push(',');
            if QUOTED_COLUMNS.contains(column) {
                push_quoted(out, &value);
            } else {
                push_plain(out, &value);
            }
        }
        out.push('\n');
        Ok(())
    }
}

fn needs_quotes(value: &str) -> bool {
    value.contains(&[',', '"', '\n', '\r'][..])
}

fn push_plain(out: &mut String, value: &str) {
    if needs_quotes(value) {
        push_quoted(out, value);
    } else {
        out.push_str(value);
    }
}

fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

use tabled::{settings::Style, Table, Tabled};
use crate::address::Address;

#[derive(Tabled)]
pub struct AddressRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Longitude")]
    pub longitude: f64,
    #[tabled(rename = "Latitude")]
    pub latitude: f64,
}

impl From<&Address> for AddressRow {
    fn from(address: &Address) -> Self {
        Self {
            name: address.name.clone(),
            longitude: address.longitude,
            latitude: address.latitude,
        }
    }
}

/// Render addresses as a rounded table; empty input renders nothing.
pub fn address_table(addresses: &[Address]) -> String {
    if addresses.is_empty() {
        return String::new();
    }

    let rows: Vec<AddressRow> = addresses.iter().map(AddressRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert!(address_table(&[]).is_empty());
    }

    #[test]
    fn test_table_lists_every_row() {
        let rendered = address_table(&[
            Address::new("MRT-3 Ayala Station", 14.549, 121.027),
            Address::new("MRT-3 Boni Station", 14.573, 121.048),
        ]);
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("MRT-3 Ayala Station"));
        assert!(rendered.contains("121.048"));
    }
}

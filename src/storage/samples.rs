//! Sample stations inserted into an empty store at startup

use crate::address::Address;

/// A seed row, kept `const` so the list lives in the binary
#[derive(Debug, Clone, Copy)]
pub struct SampleAddress {
    pub name: &'static str,
    pub longitude: f64,
    pub latitude: f64,
}

impl SampleAddress {
    pub fn to_address(&self) -> Address {
        Address::new(self.name, self.longitude, self.latitude)
    }
}

const fn sample(name: &'static str, longitude: f64, latitude: f64) -> SampleAddress {
    SampleAddress { name, longitude, latitude }
}

/// MRT-3 line, north to south
pub const SAMPLE_ADDRESSES: &[SampleAddress] = &[
    sample("MRT-3 North Avenue Station", 14.652014090305315, 121.03239208494593),
    sample("MRT-3 Quezon Avenue Station", 14.646571274698536, 121.03774575390592),
    sample("MRT-3 GMA Kamuning Station", 14.63559453870884, 121.04326675579757),
    sample("MRT-3 Cubao Station", 14.62021503109602, 121.05126478009082),
    sample("MRT-3 Santolan-Anapolis Station", 14.607646761214939, 121.05665079304319),
    sample("MRT-3 Ortigas Station", 14.588013323020583, 121.05658510797447),
    sample("MRT-3 Shaw Boulevard Station", 14.581579958048176, 121.05408022421689),
    sample("MRT-3 Boni Station", 14.5738587523626, 121.0480101360587),
    sample("MRT-3 Guadalupe Station", 14.56686874135519, 121.04540040332779),
    sample("MRT-3 Buendia Station", 14.554885349456182, 121.03453663135889),
    sample("MRT-3 Ayala Station", 14.549130558531793, 121.02710455167781),
    sample("MRT-3 Magallanes Station", 14.541939162522192, 121.01945389330639),
    sample("MRT-3 Taft Avenue Station", 14.537887098300516, 121.00126586520338),
];

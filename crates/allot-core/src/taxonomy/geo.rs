//! Geographic classification: countries, Morningstar regions and super regions.
//!
//! An instrument stores only its country. Region membership is derived through
//! [`Country::region`], which maps every country to exactly one region.

closed_enum! {
    /// ISO 3166-1 alpha-2 country codes of the operational headquarters.
    pub enum Country ("country") {
        US => "United States",
        CA => "Canada",
        BM => "Bermuda",
        MX => "Mexico",
        BR => "Brazil",
        AR => "Argentina",
        CL => "Chile",
        CO => "Colombia",
        PE => "Peru",
        UY => "Uruguay",
        PA => "Panama",
        BS => "Bahamas",
        KY => "Cayman Islands",
        VG => "British Virgin Islands",
        PR => "Puerto Rico",
        GB => "United Kingdom",
        JE => "Jersey",
        GG => "Guernsey",
        IM => "Isle of Man",
        AT => "Austria",
        BE => "Belgium",
        CY => "Cyprus",
        DE => "Germany",
        EE => "Estonia",
        ES => "Spain",
        FI => "Finland",
        FR => "France",
        GR => "Greece",
        HR => "Croatia",
        IE => "Ireland",
        IT => "Italy",
        LT => "Lithuania",
        LU => "Luxembourg",
        LV => "Latvia",
        MC => "Monaco",
        MT => "Malta",
        NL => "Netherlands",
        PT => "Portugal",
        SI => "Slovenia",
        SK => "Slovakia",
        AD => "Andorra",
        CH => "Switzerland",
        DK => "Denmark",
        FO => "Faroe Islands",
        GI => "Gibraltar",
        IS => "Iceland",
        LI => "Liechtenstein",
        NO => "Norway",
        SE => "Sweden",
        BG => "Bulgaria",
        CZ => "Czechia",
        HU => "Hungary",
        PL => "Poland",
        RO => "Romania",
        RS => "Serbia",
        RU => "Russia",
        TR => "Türkiye",
        UA => "Ukraine",
        KZ => "Kazakhstan",
        AE => "United Arab Emirates",
        BH => "Bahrain",
        EG => "Egypt",
        IL => "Israel",
        JO => "Jordan",
        KE => "Kenya",
        KW => "Kuwait",
        MA => "Morocco",
        MU => "Mauritius",
        NG => "Nigeria",
        OM => "Oman",
        QA => "Qatar",
        SA => "Saudi Arabia",
        ZA => "South Africa",
        JP => "Japan",
        AU => "Australia",
        NZ => "New Zealand",
        HK => "Hong Kong",
        KR => "South Korea",
        MO => "Macao",
        SG => "Singapore",
        TW => "Taiwan",
        BD => "Bangladesh",
        CN => "China",
        ID => "Indonesia",
        IN => "India",
        LK => "Sri Lanka",
        MY => "Malaysia",
        PH => "Philippines",
        PK => "Pakistan",
        TH => "Thailand",
        VN => "Vietnam",
    }
}

closed_enum! {
    /// Morningstar geographic regions.
    pub enum Region ("region") {
        NorthAmerica => "North America",
        LatinAmerica => "Latin America",
        UnitedKingdom => "United Kingdom",
        Eurozone => "Eurozone",
        EuropeDeveloped => "Europe (Developed, excl. Eurozone)",
        EuropeEmerging => "Europe (Emerging)",
        AfricaME => "Africa/Middle East",
        Japan => "Japan",
        Australasia => "Australasia",
        AsiaDeveloped => "Asia (Developed)",
        AsiaEmerging => "Asia (Emerging)",
    }
}

closed_enum! {
    /// Groupings of regions.
    pub enum SuperRegion ("super region") {
        Americas => "The Americas",
        EMEA => "Greater Europe",
        Asia => "Greater Asia",
    }
}

impl Country {
    /// Returns the region this country belongs to.
    #[must_use]
    #[allow(clippy::enum_glob_use)]
    pub const fn region(self) -> Region {
        use Country::*;
        match self {
            US | CA | BM => Region::NorthAmerica,
            MX | BR | AR | CL | CO | PE | UY | PA | BS | KY | VG | PR => Region::LatinAmerica,
            GB | JE | GG | IM => Region::UnitedKingdom,
            AT | BE | CY | DE | EE | ES | FI | FR | GR | HR | IE | IT | LT | LU | LV | MC | MT
            | NL | PT | SI | SK => Region::Eurozone,
            AD | CH | DK | FO | GI | IS | LI | NO | SE => Region::EuropeDeveloped,
            BG | CZ | HU | PL | RO | RS | RU | TR | UA | KZ => Region::EuropeEmerging,
            AE | BH | EG | IL | JO | KE | KW | MA | MU | NG | OM | QA | SA | ZA => {
                Region::AfricaME
            }
            JP => Region::Japan,
            AU | NZ => Region::Australasia,
            HK | KR | MO | SG | TW => Region::AsiaDeveloped,
            BD | CN | ID | IN | LK | MY | PH | PK | TH | VN => Region::AsiaEmerging,
        }
    }
}

impl Region {
    /// Returns the super region this region belongs to.
    #[must_use]
    pub const fn super_region(self) -> SuperRegion {
        match self {
            Region::NorthAmerica | Region::LatinAmerica => SuperRegion::Americas,
            Region::UnitedKingdom
            | Region::Eurozone
            | Region::EuropeDeveloped
            | Region::EuropeEmerging
            | Region::AfricaME => SuperRegion::EMEA,
            Region::Japan | Region::Australasia | Region::AsiaDeveloped | Region::AsiaEmerging => {
                SuperRegion::Asia
            }
        }
    }

    /// Returns all countries located in this region.
    pub fn countries(self) -> impl Iterator<Item = Country> {
        Country::ALL.iter().copied().filter(move |c| c.region() == self)
    }
}

impl SuperRegion {
    /// Returns all regions in this super region.
    pub fn regions(self) -> impl Iterator<Item = Region> {
        Region::ALL
            .iter()
            .copied()
            .filter(move |r| r.super_region() == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_of_country() {
        assert_eq!(Country::US.region(), Region::NorthAmerica);
        assert_eq!(Country::DE.region(), Region::Eurozone);
        assert_eq!(Country::GB.region(), Region::UnitedKingdom);
        assert_eq!(Country::CH.region(), Region::EuropeDeveloped);
        assert_eq!(Country::PL.region(), Region::EuropeEmerging);
        assert_eq!(Country::ZA.region(), Region::AfricaME);
        assert_eq!(Country::JP.region(), Region::Japan);
        assert_eq!(Country::NZ.region(), Region::Australasia);
        assert_eq!(Country::TW.region(), Region::AsiaDeveloped);
        assert_eq!(Country::IN.region(), Region::AsiaEmerging);
        assert_eq!(Country::BR.region(), Region::LatinAmerica);
    }

    #[test]
    fn test_every_region_has_a_country() {
        for region in Region::ALL {
            assert!(region.countries().next().is_some(), "{region} is empty");
        }
    }

    #[test]
    fn test_super_regions_partition_regions() {
        let total: usize = SuperRegion::ALL.iter().map(|s| s.regions().count()).sum();
        assert_eq!(total, Region::ALL.len());
        assert_eq!(Region::AfricaME.super_region(), SuperRegion::EMEA);
        assert_eq!(SuperRegion::EMEA.name(), "Greater Europe");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("US".parse::<Country>().unwrap(), Country::US);
        assert_eq!("Eurozone".parse::<Region>().unwrap(), Region::Eurozone);
        assert!("Atlantis".parse::<Region>().is_err());
        assert_eq!(Region::AsiaEmerging.to_string(), "AsiaEmerging");
        assert_eq!(Country::DE.name(), "Germany");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Region::NorthAmerica).unwrap();
        assert_eq!(json, "\"NorthAmerica\"");
        let parsed: Country = serde_json::from_str("\"JP\"").unwrap();
        assert_eq!(parsed, Country::JP);
    }
}

//! Morningstar Global Equity Classification Structure.
//!
//! The hierarchy is `Industry → IndustryGroup → Sector → SuperSector`. An
//! instrument stores only its industry; sector membership is resolved in two steps
//! through [`Industry::group`] and [`IndustryGroup::sector`].

closed_enum! {
    /// Industries, the finest level of the classification.
    pub enum Industry ("industry") {
        AgriculturalInputs => "Agricultural Inputs",
        BuildingMaterials => "Building Materials",
        Chemicals => "Chemicals",
        SpecialtyChemicals => "Specialty Chemicals",
        LumberWoodProduction => "Lumber & Wood Production",
        PaperPaperProducts => "Paper & Paper Products",
        Aluminum => "Aluminum",
        Copper => "Copper",
        OtherIndustrialMetalsMining => "Other Industrial Metals & Mining",
        Gold => "Gold",
        Silver => "Silver",
        OtherPreciousMetalsMining => "Other Precious Metals & Mining",
        CokingCoal => "Coking Coal",
        Steel => "Steel",
        AutoTruckDealerships => "Auto & Truck Dealerships",
        AutoManufacturers => "Auto Manufacturers",
        AutoParts => "Auto Parts",
        RecreationalVehicles => "Recreational Vehicles",
        FurnishingsFixturesAppliances => "Furnishings, Fixtures, & Appliances",
        ResidentialConstruction => "Residential Construction",
        TextileManufacturing => "Textile Manufacturing",
        ApparelManufacturing => "Apparel Manufacturing",
        FootwearAccessories => "Footwear & Accessories",
        PackagingContainers => "Packaging & Containers",
        PersonalServices => "Personal Services",
        Restaurants => "Restaurants",
        ApparelRetail => "Apparel Retail",
        DepartmentStores => "Department Stores",
        HomeImprovementRetail => "Home Improvement Retail",
        LuxuryGoods => "Luxury Goods",
        InternetRetail => "Internet Retail",
        SpecialtyRetail => "Specialty Retail",
        Gambling => "Gambling",
        Leisure => "Leisure",
        Lodging => "Lodging",
        ResortsCasinos => "Resorts & Casinos",
        TravelServices => "Travel Services",
        AssetManagement => "Asset Management",
        BanksDiversified => "Banks – Diversified",
        BanksRegional => "Banks – Regional",
        MortgageFinance => "Mortgage Finance",
        CapitalMarkets => "Capital Markets",
        FinancialDataStockExchanges => "Financial Data & Stock Exchanges",
        InsuranceLife => "Insurance – Life",
        InsurancePropertyCasualty => "Insurance – Property & Casualty",
        InsuranceReinsurance => "Insurance – Reinsurance",
        InsuranceSpecialty => "Insurance – Specialty",
        InsuranceBrokers => "Insurance – Brokers",
        InsuranceDiversified => "Insurance – Diversified",
        ShellCompanies => "Shell Companies",
        FinancialConglomerates => "Financial Conglomerates",
        CreditServices => "Credit Services",
        RealEstateDevelopment => "Real Estate – Development",
        RealEstateServices => "Real Estate Services",
        RealEstateDiversified => "Real Estate – Diversified",
        REITHealthcareFacilities => "REIT – Healthcare Facilities",
        REITHotelMotel => "REIT – Hotel & Motel",
        REITIndustrial => "REIT – Industrial",
        REITOffice => "REIT – Office",
        REITResidential => "REIT – Residential",
        REITRetail => "REIT – Retail",
        REITMortgage => "REIT – Mortgage",
        REITSpecialty => "REIT – Specialty",
        REITDiversified => "REIT – Diversified",
        BeveragesBrewers => "Beverages – Brewers",
        BeveragesWineriesDistilleries => "Beverages – Wineries & Distilleries",
        BeveragesNonAlcoholic => "Beverages – Non-Alcoholic",
        Confectioners => "Confectioners",
        FarmProducts => "Farm Products",
        HouseholdPersonalProducts => "Household & Personal Products",
        PackagedFoods => "Packaged Foods",
        EducationTrainingServices => "Education & Training Services",
        DiscountStores => "Discount Stores",
        FoodDistribution => "Food Distribution",
        GroceryStores => "Grocery Stores",
        Tobacco => "Tobacco",
        Biotechnology => "Biotechnology",
        DrugManufacturersGeneral => "Drug Manufacturers – General",
        DrugManufacturersSpecialtyGeneric => "Drug Manufacturers – Specialty & Generic",
        HealthcarePlans => "Healthcare Plans",
        MedicalCareFacilities => "Medical Care Facilities",
        PharmaceuticalRetailers => "Pharmaceutical Retailers",
        HealthInformationServices => "Health Information Services",
        MedicalDevices => "Medical Devices",
        MedicalInstrumentsSupplies => "Medical Instruments & Supplies",
        DiagnosticsResearch => "Diagnostics & Research",
        MedicalDistribution => "Medical Distribution",
        UtilitiesIndependentPowerProducers => "Utilities – Independent Power Producers",
        UtilitiesRenewable => "Utilities – Renewable",
        UtilitiesRegulatedWater => "Utilities – Regulated Water",
        UtilitiesRegulatedElectric => "Utilities – Regulated Electric",
        UtilitiesRegulatedGas => "Utilities – Regulated Gas",
        UtilitiesDiversified => "Utilities – Diversified",
        TelecomServices => "Telecom Services",
        AdvertisingAgencies => "Advertising Agencies",
        Publishing => "Publishing",
        Broadcasting => "Broadcasting",
        Entertainment => "Entertainment",
        InternetContentInformation => "Internet Content & Information",
        ElectronicGamingMultimedia => "Electronic Gaming & Multimedia",
        OilGasDrilling => "Oil & Gas Drilling",
        OilGasEP => "Oil & Gas E&P",
        OilGasIntegrated => "Oil & Gas Integrated",
        OilGasMidstream => "Oil & Gas Midstream",
        OilGasRefiningMarketing => "Oil & Gas Refining & Marketing",
        OilGasEquipmentServices => "Oil & Gas Equipment & Services",
        ThermalCoal => "Thermal Coal",
        Uranium => "Uranium",
        AerospaceDefense => "Aerospace & Defense",
        SpecialtyBusinessServices => "Specialty Business Services",
        ConsultingServices => "Consulting Services",
        RentalLeasingServices => "Rental & Leasing Services",
        SecurityProtectionServices => "Security & Protection Services",
        StaffingEmploymentServices => "Staffing & Employment Services",
        Conglomerates => "Conglomerates",
        EngineeringConstruction => "Engineering & Construction",
        InfrastructureOperations => "Infrastructure Operations",
        BuildingProductsEquipment => "Building Products & Equipment",
        FarmHeavyConstructionMachinery => "Farm & Heavy Construction Machinery",
        IndustrialDistribution => "Industrial Distribution",
        BusinessEquipmentSupplies => "Business Equipment & Supplies",
        SpecialtyIndustrialMachinery => "Specialty Industrial Machinery",
        MetalFabrication => "Metal Fabrication",
        PollutionTreatmentControls => "Pollution & Treatment Controls",
        ToolsAccessories => "Tools & Accessories",
        ElectricalEquipmentParts => "Electrical Equipment & Parts",
        AirportsAirServices => "Airports & Air Services",
        Airlines => "Airlines",
        Railroads => "Railroads",
        MarineShipping => "Marine Shipping",
        Trucking => "Trucking",
        IntegratedFreightLogistics => "Integrated Freight & Logistics",
        WasteManagement => "Waste Management",
        InformationTechnologyServices => "Information Technology Services",
        SoftwareApplication => "Software – Application",
        SoftwareInfrastructure => "Software – Infrastructure",
        CommunicationEquipment => "Communication Equipment",
        ComputerHardware => "Computer Hardware",
        ConsumerElectronics => "Consumer Electronics",
        ElectronicComponents => "Electronic Components",
        ElectronicsComputerDistribution => "Electronics & Computer Distribution",
        ScientificTechnicalInstruments => "Scientific & Technical Instruments",
        SemiconductorEquipmentMaterials => "Semiconductor Equipment & Materials",
        Semiconductors => "Semiconductors",
        Solar => "Solar",
    }
}

closed_enum! {
    /// Industry groups, the level between industries and sectors.
    pub enum IndustryGroup ("industry group") {
        Agriculture => "Agriculture",
        BuildingMaterials => "Building Materials",
        Chemicals => "Chemicals",
        ForestProducts => "Forest Products",
        MetalsMining => "Metals & Mining",
        Steel => "Steel",
        VehiclesParts => "Vehicles & Parts",
        FurnishingsFixturesAppliances => "Furnishings, Fixtures & Appliances",
        HomebuildingConstruction => "Homebuilding & Construction",
        ManufacturingApparelAccessories => "Manufacturing – Apparel & Accessories",
        PackagingContainers => "Packaging & Containers",
        PersonalServices => "Personal Services",
        Restaurants => "Restaurants",
        RetailCyclical => "Retail – Cyclical",
        TravelLeisure => "Travel & Leisure",
        AssetManagement => "Asset Management",
        Banks => "Banks",
        CapitalMarkets => "Capital Markets",
        Insurance => "Insurance",
        DiversifiedFinancialServices => "Diversified Financial Services",
        CreditServices => "Credit Services",
        RealEstate => "Real Estate",
        REITs => "Real Estate Investment Trusts",
        BeveragesAlcoholic => "Beverages – Alcoholic",
        BeveragesNonAlcoholic => "Beverages – Non-Alcoholic",
        ConsumerPackagedGoods => "Consumer Packaged Goods",
        Education => "Education",
        RetailDefensive => "Retail – Defensive",
        TobaccoProducts => "Tobacco Products",
        Biotechnology => "Biotechnology",
        DrugManufacturers => "Drug Manufacturers",
        HealthcarePlans => "Healthcare Plans",
        HealthcareProvidersServices => "Healthcare Providers & Services",
        MedicalDevicesInstruments => "Medical Devices & Instruments",
        MedicalDiagnosticsResearch => "Medical Diagnostics & Research",
        MedicalDistribution => "Medical Distribution",
        UtilitiesIndependentPowerProducers => "Utilities – Independent Power Producers",
        UtilitiesRegulated => "Utilities – Regulated",
        UtilitiesDiversified => "Utilities – Diversified",
        TelecommunicationServices => "Telecommunication Services",
        MediaDiversified => "Media – Diversified",
        InteractiveMedia => "Interactive Media",
        OilGas => "Oil & Gas",
        OtherEnergySources => "Other Energy Sources",
        AerospaceDefense => "Aerospace & Defense",
        BusinessServices => "Business Services",
        Conglomerates => "Conglomerates",
        Construction => "Construction",
        FarmHeavyConstructionMachinery => "Farm & Heavy Construction Machinery",
        IndustrialDistribution => "Industrial Distribution",
        BusinessEquipmentSupplies => "Business Equipment & Supplies",
        IndustrialProducts => "Industrial Products",
        Transportation => "Transportation",
        WasteManagement => "Waste Management",
        Software => "Software",
        Hardware => "Hardware",
        Semiconductors => "Semiconductors",
    }
}

closed_enum! {
    /// Sectors, the level at which sector constraints are expressed.
    pub enum Sector ("sector") {
        BasicMaterials => "Basic Materials",
        ConsumerCyclical => "Consumer Cyclical",
        FinancialServices => "Financial Services",
        RealEstate => "Real Estate",
        ConsumerDefensive => "Consumer Defensive",
        Healthcare => "Healthcare",
        Utilities => "Utilities",
        CommunicationServices => "Communication Services",
        Energy => "Energy",
        Industrials => "Industrials",
        Technology => "Technology",
    }
}

closed_enum! {
    /// Groupings of sectors by sensitivity to the economic cycle.
    pub enum SuperSector ("super sector") {
        Cyclical => "Cyclical",
        Defensive => "Defensive",
        Sensitive => "Sensitive",
    }
}

impl Industry {
    /// Returns the industry group this industry belongs to.
    #[must_use]
    #[allow(clippy::enum_glob_use)]
    pub const fn group(self) -> IndustryGroup {
        use Industry::*;
        match self {
            AgriculturalInputs => IndustryGroup::Agriculture,
            BuildingMaterials => IndustryGroup::BuildingMaterials,
            Chemicals | SpecialtyChemicals => IndustryGroup::Chemicals,
            LumberWoodProduction | PaperPaperProducts => IndustryGroup::ForestProducts,
            Aluminum | Copper | OtherIndustrialMetalsMining | Gold | Silver
            | OtherPreciousMetalsMining => IndustryGroup::MetalsMining,
            CokingCoal | Steel => IndustryGroup::Steel,
            AutoTruckDealerships | AutoManufacturers | AutoParts | RecreationalVehicles => {
                IndustryGroup::VehiclesParts
            }
            FurnishingsFixturesAppliances => IndustryGroup::FurnishingsFixturesAppliances,
            ResidentialConstruction => IndustryGroup::HomebuildingConstruction,
            TextileManufacturing | ApparelManufacturing | FootwearAccessories => {
                IndustryGroup::ManufacturingApparelAccessories
            }
            PackagingContainers => IndustryGroup::PackagingContainers,
            PersonalServices => IndustryGroup::PersonalServices,
            Restaurants => IndustryGroup::Restaurants,
            ApparelRetail | DepartmentStores | HomeImprovementRetail | LuxuryGoods
            | InternetRetail | SpecialtyRetail => IndustryGroup::RetailCyclical,
            Gambling | Leisure | Lodging | ResortsCasinos | TravelServices => {
                IndustryGroup::TravelLeisure
            }
            AssetManagement => IndustryGroup::AssetManagement,
            BanksDiversified | BanksRegional | MortgageFinance => IndustryGroup::Banks,
            CapitalMarkets | FinancialDataStockExchanges => IndustryGroup::CapitalMarkets,
            InsuranceLife | InsurancePropertyCasualty | InsuranceReinsurance
            | InsuranceSpecialty | InsuranceBrokers | InsuranceDiversified => {
                IndustryGroup::Insurance
            }
            ShellCompanies | FinancialConglomerates => IndustryGroup::DiversifiedFinancialServices,
            CreditServices => IndustryGroup::CreditServices,
            RealEstateDevelopment | RealEstateServices | RealEstateDiversified => {
                IndustryGroup::RealEstate
            }
            REITHealthcareFacilities | REITHotelMotel | REITIndustrial | REITOffice
            | REITResidential | REITRetail | REITMortgage | REITSpecialty | REITDiversified => {
                IndustryGroup::REITs
            }
            BeveragesBrewers | BeveragesWineriesDistilleries => IndustryGroup::BeveragesAlcoholic,
            BeveragesNonAlcoholic => IndustryGroup::BeveragesNonAlcoholic,
            Confectioners | FarmProducts | HouseholdPersonalProducts | PackagedFoods => {
                IndustryGroup::ConsumerPackagedGoods
            }
            EducationTrainingServices => IndustryGroup::Education,
            DiscountStores | FoodDistribution | GroceryStores => IndustryGroup::RetailDefensive,
            Tobacco => IndustryGroup::TobaccoProducts,
            Biotechnology => IndustryGroup::Biotechnology,
            DrugManufacturersGeneral | DrugManufacturersSpecialtyGeneric => {
                IndustryGroup::DrugManufacturers
            }
            HealthcarePlans => IndustryGroup::HealthcarePlans,
            MedicalCareFacilities | PharmaceuticalRetailers | HealthInformationServices => {
                IndustryGroup::HealthcareProvidersServices
            }
            MedicalDevices | MedicalInstrumentsSupplies => IndustryGroup::MedicalDevicesInstruments,
            DiagnosticsResearch => IndustryGroup::MedicalDiagnosticsResearch,
            MedicalDistribution => IndustryGroup::MedicalDistribution,
            UtilitiesIndependentPowerProducers | UtilitiesRenewable => {
                IndustryGroup::UtilitiesIndependentPowerProducers
            }
            UtilitiesRegulatedWater | UtilitiesRegulatedElectric | UtilitiesRegulatedGas => {
                IndustryGroup::UtilitiesRegulated
            }
            UtilitiesDiversified => IndustryGroup::UtilitiesDiversified,
            TelecomServices => IndustryGroup::TelecommunicationServices,
            AdvertisingAgencies | Publishing | Broadcasting | Entertainment => {
                IndustryGroup::MediaDiversified
            }
            InternetContentInformation | ElectronicGamingMultimedia => {
                IndustryGroup::InteractiveMedia
            }
            OilGasDrilling | OilGasEP | OilGasIntegrated | OilGasMidstream
            | OilGasRefiningMarketing | OilGasEquipmentServices => IndustryGroup::OilGas,
            ThermalCoal | Uranium => IndustryGroup::OtherEnergySources,
            AerospaceDefense => IndustryGroup::AerospaceDefense,
            SpecialtyBusinessServices | ConsultingServices | RentalLeasingServices
            | SecurityProtectionServices | StaffingEmploymentServices => {
                IndustryGroup::BusinessServices
            }
            Conglomerates => IndustryGroup::Conglomerates,
            EngineeringConstruction | InfrastructureOperations | BuildingProductsEquipment => {
                IndustryGroup::Construction
            }
            FarmHeavyConstructionMachinery => IndustryGroup::FarmHeavyConstructionMachinery,
            IndustrialDistribution => IndustryGroup::IndustrialDistribution,
            BusinessEquipmentSupplies => IndustryGroup::BusinessEquipmentSupplies,
            SpecialtyIndustrialMachinery | MetalFabrication | PollutionTreatmentControls
            | ToolsAccessories | ElectricalEquipmentParts => IndustryGroup::IndustrialProducts,
            AirportsAirServices | Airlines | Railroads | MarineShipping | Trucking
            | IntegratedFreightLogistics => IndustryGroup::Transportation,
            WasteManagement => IndustryGroup::WasteManagement,
            InformationTechnologyServices | SoftwareApplication | SoftwareInfrastructure => {
                IndustryGroup::Software
            }
            CommunicationEquipment | ComputerHardware | ConsumerElectronics
            | ElectronicComponents | ElectronicsComputerDistribution
            | ScientificTechnicalInstruments => IndustryGroup::Hardware,
            SemiconductorEquipmentMaterials | Semiconductors | Solar => {
                IndustryGroup::Semiconductors
            }
        }
    }

    /// Returns the sector of this industry, resolved through its group.
    #[must_use]
    pub const fn sector(self) -> Sector {
        self.group().sector()
    }
}

impl IndustryGroup {
    /// Returns the sector this industry group belongs to.
    #[must_use]
    #[allow(clippy::enum_glob_use)]
    pub const fn sector(self) -> Sector {
        use IndustryGroup::*;
        match self {
            Agriculture | BuildingMaterials | Chemicals | ForestProducts | MetalsMining | Steel => {
                Sector::BasicMaterials
            }
            VehiclesParts
            | FurnishingsFixturesAppliances
            | HomebuildingConstruction
            | ManufacturingApparelAccessories
            | PackagingContainers
            | PersonalServices
            | Restaurants
            | RetailCyclical
            | TravelLeisure => Sector::ConsumerCyclical,
            AssetManagement
            | Banks
            | CapitalMarkets
            | Insurance
            | DiversifiedFinancialServices
            | CreditServices => Sector::FinancialServices,
            RealEstate | REITs => Sector::RealEstate,
            BeveragesAlcoholic
            | BeveragesNonAlcoholic
            | ConsumerPackagedGoods
            | Education
            | RetailDefensive
            | TobaccoProducts => Sector::ConsumerDefensive,
            Biotechnology
            | DrugManufacturers
            | HealthcarePlans
            | HealthcareProvidersServices
            | MedicalDevicesInstruments
            | MedicalDiagnosticsResearch
            | MedicalDistribution => Sector::Healthcare,
            UtilitiesIndependentPowerProducers | UtilitiesRegulated | UtilitiesDiversified => {
                Sector::Utilities
            }
            TelecommunicationServices | MediaDiversified | InteractiveMedia => {
                Sector::CommunicationServices
            }
            OilGas | OtherEnergySources => Sector::Energy,
            AerospaceDefense
            | BusinessServices
            | Conglomerates
            | Construction
            | FarmHeavyConstructionMachinery
            | IndustrialDistribution
            | BusinessEquipmentSupplies
            | IndustrialProducts
            | Transportation
            | WasteManagement => Sector::Industrials,
            Software | Hardware | Semiconductors => Sector::Technology,
        }
    }

    /// Returns all industries in this group.
    pub fn industries(self) -> impl Iterator<Item = Industry> {
        Industry::ALL.iter().copied().filter(move |i| i.group() == self)
    }
}

impl Sector {
    /// Returns the super sector this sector belongs to.
    #[must_use]
    pub const fn super_sector(self) -> SuperSector {
        match self {
            Sector::BasicMaterials
            | Sector::ConsumerCyclical
            | Sector::FinancialServices
            | Sector::RealEstate => SuperSector::Cyclical,
            Sector::ConsumerDefensive | Sector::Healthcare | Sector::Utilities => {
                SuperSector::Defensive
            }
            Sector::CommunicationServices
            | Sector::Energy
            | Sector::Industrials
            | Sector::Technology => SuperSector::Sensitive,
        }
    }

    /// Returns all industry groups in this sector.
    pub fn groups(self) -> impl Iterator<Item = IndustryGroup> {
        IndustryGroup::ALL
            .iter()
            .copied()
            .filter(move |g| g.sector() == self)
    }
}

impl SuperSector {
    /// Returns all sectors in this super sector.
    pub fn sectors(self) -> impl Iterator<Item = Sector> {
        Sector::ALL
            .iter()
            .copied()
            .filter(move |s| s.super_sector() == self)
    }
}

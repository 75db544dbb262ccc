use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpendSplit {
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VendorSnapshot {
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub spend: f64,
    pub transactions: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SingleSourceSnapshot {
    pub commodity: &'static str,
    pub vendor: &'static str,
    pub spend: f64,
    pub transactions: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthSnapshot {
    pub month: &'static str,
    pub spend: f64,
    pub transactions: u64,
    pub vendors: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSnapshot {
    pub total_vendors: u64,
    pub total_transactions: u64,
    pub total_spend: f64,
    pub data_year: &'static str,
    pub major_spend: SpendSplit,
    pub tail_spend: SpendSplit,
    pub top_vendors: &'static [VendorSnapshot],
    pub single_source_suppliers: &'static [SingleSourceSnapshot],
    pub total_single_source_risk: f64,
    pub critical_supplier: &'static str,
    pub critical_supplier_exposure: f64,
    pub monthly_trends: &'static [MonthSnapshot],
}

pub const REFERENCE_INSIGHTS: InsightSnapshot = InsightSnapshot {
    total_vendors: 2718,
    total_transactions: 72853,
    total_spend: 515_873_620.03,
    data_year: "2018",
    major_spend: SpendSplit {
        amount: 412_253_045.8,
        percentage: 79.91,
    },
    tail_spend: SpendSplit {
        amount: 103_620_574.23,
        percentage: 20.09,
    },
    top_vendors: &[
        VendorSnapshot {
            name: "TECHLINE INC",
            city: "AUSTIN",
            state: "TX",
            spend: 30_343_314.45,
            transactions: 5772,
        },
        VendorSnapshot {
            name: "SUN COAST RESOURCES INC",
            city: "HOUSTON",
            state: "TX",
            spend: 29_703_968.75,
            transactions: 501,
        },
        VendorSnapshot {
            name: "TEXAS ELECTRIC COOPERATIVES",
            city: "GEORGETOWN",
            state: "TX",
            spend: 24_473_960.56,
            transactions: 1165,
        },
        VendorSnapshot {
            name: "OLDCASTLE MATERIALS TEXAS INC",
            city: "Round Rock",
            state: "TX",
            spend: 12_862_213.76,
            transactions: 1391,
        },
        VendorSnapshot {
            name: "PRIESTER-MELL & NICHOLSON INC.",
            city: "AUSTIN",
            state: "TX",
            spend: 12_631_177.43,
            transactions: 1758,
        },
    ],
    single_source_suppliers: &[
        SingleSourceSnapshot {
            commodity: "B20 BIO-DIESEL FUEL",
            vendor: "SUN COAST RESOURCES INC",
            spend: 10_229_703.08,
            transactions: 89,
        },
        SingleSourceSnapshot {
            commodity: "E10 - ETHANOL",
            vendor: "SUN COAST RESOURCES INC",
            spend: 9_826_523.72,
            transactions: 126,
        },
        SingleSourceSnapshot {
            commodity: "LIME, QUICK",
            vendor: "AUSTIN WHITE LIME CO",
            spend: 7_335_291.16,
            transactions: 78,
        },
        SingleSourceSnapshot {
            commodity: "DIESEL FUEL (MOTOR FUEL)",
            vendor: "SUN COAST RESOURCES INC",
            spend: 6_308_806.42,
            transactions: 110,
        },
        SingleSourceSnapshot {
            commodity: "EMULSIONS, ASPHALT",
            vendor: "ERGON ASPHALT & EMULSIONS INC",
            spend: 4_807_270.68,
            transactions: 554,
        },
    ],
    total_single_source_risk: 38_507_597.06,
    critical_supplier: "SUN COAST RESOURCES INC",
    critical_supplier_exposure: 29_665_067.19,
    monthly_trends: &[
        MonthSnapshot {
            month: "2018-12",
            spend: 7_188_118.33,
            transactions: 449,
            vendors: 130,
        },
        MonthSnapshot {
            month: "2018-11",
            spend: 2_981_755.21,
            transactions: 447,
            vendors: 115,
        },
        MonthSnapshot {
            month: "2018-10",
            spend: 13_722_464.41,
            transactions: 707,
            vendors: 179,
        },
        MonthSnapshot {
            month: "2018-09",
            spend: 3_401_122.61,
            transactions: 475,
            vendors: 148,
        },
        MonthSnapshot {
            month: "2018-08",
            spend: 4_790_980.6,
            transactions: 688,
            vendors: 149,
        },
        MonthSnapshot {
            month: "2018-07",
            spend: 5_220_138.9,
            transactions: 554,
            vendors: 147,
        },
    ],
};

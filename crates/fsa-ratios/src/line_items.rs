//! Line-item labels as published on the source pages.
//!
//! These are lookup keys into [`LineItems`](fsa_core::LineItems) and must match
//! the source text exactly, including full-width punctuation.

// Statement of financial position

/// 流動資產 - current assets.
pub const CURRENT_ASSETS: &str = "流動資產";
/// 流動負債 - current liabilities.
pub const CURRENT_LIABILITIES: &str = "流動負債";
/// 現金及約當現金 - cash and cash equivalents.
pub const CASH: &str = "現金及約當現金";
/// Financial assets at fair value through profit or loss, current.
pub const FVTPL_FINANCIAL_ASSETS: &str = "透過損益按公允價值衡量之金融資產－流動";
/// Financial assets at fair value through other comprehensive income, current.
pub const FVOCI_FINANCIAL_ASSETS: &str = "透過其他綜合損益按公允價值衡量之金融資產－流動";
/// Financial assets at amortised cost, current.
pub const AMORTISED_COST_FINANCIAL_ASSETS: &str = "按攤銷後成本衡量之金融資產－流動";
/// Hedging financial assets, current.
pub const HEDGING_FINANCIAL_ASSETS: &str = "避險之金融資產－流動";
/// 應收帳款及票據 - accounts and notes receivable.
pub const RECEIVABLES: &str = "應收帳款及票據";
/// 存貨 - inventory.
pub const INVENTORY: &str = "存貨";
/// 不動產廠房及設備 - property, plant and equipment.
pub const FIXED_ASSETS: &str = "不動產廠房及設備";
/// 資產總額 - total assets.
pub const TOTAL_ASSETS: &str = "資產總額";
/// 負債總額 - total liabilities.
pub const TOTAL_LIABILITIES: &str = "負債總額";
/// 非流動負債 - non-current liabilities.
pub const NON_CURRENT_LIABILITIES: &str = "非流動負債";
/// 股東權益總額 - total shareholders' equity.
pub const TOTAL_EQUITY: &str = "股東權益總額";

/// The four current financial-asset categories counted as quick assets.
pub const CURRENT_FINANCIAL_ASSETS: [&str; 4] = [
    FVTPL_FINANCIAL_ASSETS,
    FVOCI_FINANCIAL_ASSETS,
    AMORTISED_COST_FINANCIAL_ASSETS,
    HEDGING_FINANCIAL_ASSETS,
];

// Income statement

/// 營業收入淨額 - net sales.
pub const NET_SALES: &str = "營業收入淨額";
/// 營業成本 - cost of goods sold.
pub const COST_OF_GOODS_SOLD: &str = "營業成本";
/// 營業毛利 - gross profit.
pub const GROSS_PROFIT: &str = "營業毛利";
/// 營業利益 - operating income.
pub const OPERATING_INCOME: &str = "營業利益";
/// 稅前淨利 - income before tax.
pub const PRE_TAX_INCOME: &str = "稅前淨利";
/// 所得稅費用 - income tax expense.
pub const INCOME_TAX: &str = "所得稅費用";
/// 利息支出 - interest expense.
pub const INTEREST_EXPENSE: &str = "利息支出";

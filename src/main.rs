// ==========================================
// 智慧农场记录与监测系统 - 控制台入口
// ==========================================
// 系统定位: 决策支持核心的演示入口
// 流程: 日志 → 配置 → 样例数据 → 驾驶舱汇总 → 演示导入
// ==========================================

use smart_farm_notes::chain::SimulatedLedger;
use smart_farm_notes::config::ConfigManager;
use smart_farm_notes::dataset::sample::{sample_dataset, sample_today};
use smart_farm_notes::domain::import::CreatedEntity;
use smart_farm_notes::{logging, DashboardApi, ImportApi};

const DEMO_IMPORT_JSON: &str = r#"[
  {
    "date": "2024-03-11",
    "fieldName": "North Field",
    "cropType": "Wheat",
    "eventType": "watering"
  },
  {
    "date": "2024-03-11",
    "fieldName": "South Field",
    "cropType": "Wheat",
    "eventType": "observation",
    "noteText": "Growth looks healthy after rain"
  },
  {
    "date": "2024-03-11",
    "fieldName": "Hill Field",
    "cropType": "Rye",
    "eventType": "problem",
    "noteText": "Unknown field should be reported"
  }
]"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", smart_farm_notes::APP_NAME);
    tracing::info!("系统版本: {}", smart_farm_notes::VERSION);
    tracing::info!("==================================================");

    // 加载配置
    let config = ConfigManager::load_default();
    let watering_interval = config.get_watering_interval_days();
    tracing::info!("灌溉间隔配置: {} 天", watering_interval);

    // 样例数据集与注入时钟
    let mut dataset = sample_dataset();
    let today = sample_today();
    tracing::info!("样例数据集就绪, 当前日期口径: {}", today);

    // ==========================================
    // 驾驶舱汇总
    // ==========================================
    let dashboard = DashboardApi::new(today, watering_interval);
    let summary = dashboard.summary(&dataset);

    println!("==================================================");
    println!("驾驶舱汇总 ({})", today);
    println!("==================================================");
    println!("活跃批次:       {}", summary.active_batches);
    println!("灌溉逾期批次:   {}", summary.overdue_irrigation);
    println!("状态危急批次:   {}", summary.critical_status);
    for field_count in &summary.batches_per_field {
        println!("  {}: {} 个批次", field_count.field_name, field_count.count);
    }

    // ==========================================
    // 演示导入
    // ==========================================
    let import_api = ImportApi::new();
    let report = import_api.import_json(DEMO_IMPORT_JSON, &dataset, chrono::Utc::now())?;

    println!("==================================================");
    println!(
        "演示导入: {} 条记录, 新建 {}, 错误 {}, 警告 {}",
        report.total,
        report.created.len(),
        report.errors.len(),
        report.warnings.len()
    );
    for error in &report.errors {
        println!("  [错误] {}", error);
    }
    for warning in &report.warnings {
        println!("  [警告] {}", warning);
    }

    // 模拟上链保存后并回数据集
    let ledger = SimulatedLedger::new(config.get_ledger_latency_ms());
    for entity in &report.created {
        let receipt = match entity {
            CreatedEntity::IrrigationEvent(event) => ledger.save_irrigation_event(event).await?,
            CreatedEntity::StatusChange(entry) => ledger.save_status_change(entry).await?,
            CreatedEntity::Note(note) => ledger.save_note(note).await?,
        };
        println!("  [上链] {} -> {}", receipt.action, receipt.tx_hash);
    }

    let absorbed = dataset.absorb(report.created);
    tracing::info!("并回 {} 个新实体", absorbed);

    // 并回后的驾驶舱口径变化
    let after = dashboard.summary(&dataset);
    println!("并回后灌溉逾期批次: {}", after.overdue_irrigation);

    Ok(())
}

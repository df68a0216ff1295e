// ==========================================
// 配送日期规划 - 命令行入口
// ==========================================
// 用法: delivery-date-planner [REQUEST_JSON|-] [--policy PATH] [--explain] [--log-json]
// 输入: DeliveryDateRequest JSON(文件或 stdin)
// 输出: 排序后的候选配送日 JSON(stdout)
// ==========================================

use anyhow::{bail, Context, Result};
use delivery_date_planner::{logging, DeliveryDateApi, DeliveryDateRequest, DeliveryPolicy};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    request_path: Option<PathBuf>,
    policy_path: Option<PathBuf>,
    explain: bool,
    log_json: bool,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = CliArgs::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--policy" => {
                let path = iter.next().context("--policy 需要文件路径")?;
                args.policy_path = Some(PathBuf::from(path));
            }
            "--explain" => args.explain = true,
            "--log-json" => args.log_json = true,
            "-" => args.request_path = None,
            other if other.starts_with("--") => bail!("未知参数: {}", other),
            other => {
                if args.request_path.is_some() {
                    bail!("只能指定一个请求文件");
                }
                args.request_path = Some(PathBuf::from(other));
            }
        }
    }

    Ok(args)
}

fn read_request(path: Option<&PathBuf>) -> Result<DeliveryDateRequest> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("无法读取请求文件: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("无法读取 stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("请求 JSON 格式错误")
}

fn load_policy(path: Option<&PathBuf>) -> Result<DeliveryPolicy> {
    let policy = match path {
        Some(path) => DeliveryPolicy::load_from_file(path)?,
        None => DeliveryPolicy::load_or_default()?,
    };
    Ok(policy)
}

fn main() -> Result<()> {
    let args = parse_args()?;

    if args.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", delivery_date_planner::APP_NAME, delivery_date_planner::VERSION);

    let policy = load_policy(args.policy_path.as_ref())?;
    let api = DeliveryDateApi::with_policy(policy)?;
    let request = read_request(args.request_path.as_ref())?;

    let output = if args.explain {
        serde_json::to_string_pretty(&api.explain_window(&request)?)?
    } else {
        serde_json::to_string_pretty(&api.handle_request(&request)?)?
    };

    println!("{}", output);
    Ok(())
}

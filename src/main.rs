use shape_ngin::AppConfig;

fn main() -> anyhow::Result<()> {
    shape_ngin::run(AppConfig::default().from_env())
}

use ombre_studio::Studio;

fn main() -> anyhow::Result<()> {
    Studio::new().title("Ombre").size(720.0, 480.0).run()
}

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use augmenta::application::services::{
    AssetService, AudioOptions, AudioPipeline, ImagePipeline, ImageTransform, MediaDispatcher,
    TextPipeline,
};
use augmenta::infrastructure::audio::{PcmAudioCodec, StftAnalyzer, SvgSpectrogramRenderer};
use augmenta::infrastructure::imaging::RasterImageCodec;
use augmenta::infrastructure::observability::{TracingConfig, init_tracing};
use augmenta::infrastructure::storage::BlobStoreFactory;
use augmenta::infrastructure::text::{ThesaurusFactory, TiktokenTokenizer, TreebankWordSegmenter};
use augmenta::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    ));

    let tokenizer =
        Arc::new(TiktokenTokenizer::cl100k().context("Failed to load cl100k_base vocabulary")?);
    let thesaurus = match ThesaurusFactory::create(settings.text.wordnet_dir.as_deref()) {
        Ok(thesaurus) => thesaurus,
        Err(e) if environment == Environment::Test => {
            tracing::warn!(error = %e, "WordNet unavailable, augmentation will not add synonyms");
            ThesaurusFactory::empty()
        }
        Err(e) => return Err(e).context("Failed to load WordNet"),
    };
    let text = TextPipeline::new(
        tokenizer,
        Arc::new(TreebankWordSegmenter::new()),
        thesaurus,
        settings.text.max_synonyms,
    );

    let image = ImagePipeline::new(
        Arc::new(RasterImageCodec::new()),
        ImageTransform {
            width: settings.image.target_width,
            height: settings.image.target_height,
            rotation_degrees: settings.image.rotation_degrees,
        },
    );

    let analyzer = StftAnalyzer::new(settings.audio.n_fft, settings.audio.hop_length)
        .context("Invalid STFT settings")?;
    let audio = AudioPipeline::new(
        Arc::new(PcmAudioCodec::new(settings.audio.resample_to())),
        Arc::new(analyzer),
        Arc::new(SvgSpectrogramRenderer::with_system_fonts()),
        AudioOptions {
            top_db: settings.audio.top_db,
            pitch_shift_semitones: settings.audio.pitch_shift_semitones,
        },
    );

    let blob_store =
        BlobStoreFactory::create(&settings.storage).context("Failed to create blob store")?;
    let assets = AssetService::new(blob_store, settings.storage.public_url_prefix.clone());

    let state = AppState::new(
        Arc::new(MediaDispatcher::new(text, image, audio)),
        Arc::new(assets),
    )
    .with_max_body_bytes(settings.limits.max_body_bytes);

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

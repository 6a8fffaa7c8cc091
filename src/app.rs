//! Application assembly
//!
//! `AppDeps` groups the port implementations the app needs; it is plain
//! parameter packing, not a builder. `App` owns the session bootstrap and
//! hands out the use cases the screens call.

use std::sync::Arc;

use sf_app::usecases::auth::{SignIn, SignOut, SignUp};
use sf_app::usecases::booking::{BookingHistory, CreateBooking};
use sf_app::usecases::deals::FetchDeals;
use sf_app::usecases::hotels::ListHotels;
use sf_app::usecases::profile::{GetProfile, UpdateDisplayName};
use sf_app::usecases::weather::GetHotelWeather;
use sf_app::SessionBootstrap;
use sf_core::config::AppConfig;
use sf_core::ports::{
    AuthGatewayPort, BookingRepositoryPort, ClockPort, DealCatalogPort, HotelCatalogPort,
    KeyValueStorePort, UserRepositoryPort, WeatherPort,
};
use sf_infra::{
    FileKeyValueStore, HttpAuthGateway, HttpBookingRepository, HttpUserRepository,
    OpenMeteoClient, ProductCatalogClient, StaticHotelCatalog, SystemClock,
};

/// Dependency grouping for App construction. All fields are required.
pub struct AppDeps {
    pub store: Arc<dyn KeyValueStorePort>,
    pub auth: Arc<dyn AuthGatewayPort>,
    pub hotels: Arc<dyn HotelCatalogPort>,
    pub deals: Arc<dyn DealCatalogPort>,
    pub weather: Arc<dyn WeatherPort>,
    pub bookings: Arc<dyn BookingRepositoryPort>,
    pub users: Arc<dyn UserRepositoryPort>,
    pub clock: Arc<dyn ClockPort>,
}

impl AppDeps {
    /// Production wiring: file store plus the HTTP service clients.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            store: Arc::new(FileKeyValueStore::in_app_data_dir()?),
            auth: Arc::new(HttpAuthGateway::new(config.backend_base_url.clone())),
            hotels: Arc::new(StaticHotelCatalog::new()),
            deals: Arc::new(ProductCatalogClient::new(config.catalog_base_url.clone())),
            weather: Arc::new(OpenMeteoClient::new(config.weather_base_url.clone())),
            bookings: Arc::new(HttpBookingRepository::new(config.backend_base_url.clone())),
            users: Arc::new(HttpUserRepository::new(config.backend_base_url.clone())),
            clock: Arc::new(SystemClock),
        })
    }
}

/// The assembled application.
pub struct App {
    config: AppConfig,
    deps: AppDeps,
    session: SessionBootstrap,
}

impl App {
    /// This constructor signature is the dependency manifest: every port
    /// must be provided, no defaults.
    pub fn new(config: AppConfig, deps: AppDeps) -> Self {
        let session = SessionBootstrap::new(
            deps.store.clone(),
            deps.auth.clone(),
            config.expected_storage_version.clone(),
        );
        Self {
            config,
            deps,
            session,
        }
    }

    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let deps = AppDeps::from_config(&config)?;
        Ok(Self::new(config, deps))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The session bootstrap owning the screen state machine.
    pub fn session(&self) -> &SessionBootstrap {
        &self.session
    }

    pub fn sign_up(&self) -> SignUp {
        SignUp::new(self.deps.auth.clone(), self.deps.store.clone())
    }

    pub fn sign_in(&self) -> SignIn {
        SignIn::new(self.deps.auth.clone())
    }

    pub fn sign_out(&self) -> SignOut {
        SignOut::new(self.deps.auth.clone())
    }

    pub fn list_hotels(&self) -> ListHotels {
        ListHotels::new(self.deps.hotels.clone())
    }

    pub fn fetch_deals(&self) -> FetchDeals {
        FetchDeals::new(self.deps.deals.clone(), self.config.deals_limit)
    }

    pub fn hotel_weather(&self) -> GetHotelWeather {
        GetHotelWeather::new(self.deps.weather.clone())
    }

    pub fn create_booking(&self) -> CreateBooking {
        CreateBooking::new(
            self.deps.hotels.clone(),
            self.deps.bookings.clone(),
            self.deps.auth.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn booking_history(&self) -> BookingHistory {
        BookingHistory::new(self.deps.bookings.clone())
    }

    pub fn get_profile(&self) -> GetProfile {
        GetProfile::new(self.deps.users.clone())
    }

    pub fn update_display_name(&self) -> UpdateDisplayName {
        UpdateDisplayName::new(self.deps.users.clone())
    }
}

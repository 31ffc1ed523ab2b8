//! Starter content for an empty database.
//!
//! Each section is seeded only when its table is empty, so re-running is
//! harmless and edited content is never overwritten.

use sqlx::PgPool;

use crate::db::{
    OverviewRepository, RepositoryError, ServiceRepository, TeamMemberRepository, ValueRepository,
};
use crate::models::content::{NewOverview, NewService, NewTeamMember, NewValue};

/// Seed all content sections that are currently empty.
///
/// # Errors
///
/// Returns `RepositoryError` if any query fails.
pub async fn seed_content(pool: &PgPool) -> Result<(), RepositoryError> {
    seed_overview(pool).await?;
    seed_values(pool).await?;
    seed_services(pool).await?;
    seed_team(pool).await?;

    tracing::info!("content seeding complete");
    Ok(())
}

async fn seed_overview(pool: &PgPool) -> Result<(), RepositoryError> {
    let repo = OverviewRepository::new(pool);
    if repo.get().await?.is_some() {
        return Ok(());
    }

    repo.upsert(&NewOverview {
        title: "Professional Transportation Solutions Across Europe".to_owned(),
        description: "LogiFlow provides comprehensive logistics services with cutting-edge \
                      technology, ensuring your cargo reaches its destination safely, quickly, \
                      and reliably across European markets."
            .to_owned(),
    })
    .await?;

    tracing::info!("seeded overview");
    Ok(())
}

async fn seed_values(pool: &PgPool) -> Result<(), RepositoryError> {
    let repo = ValueRepository::new(pool);
    if !repo.list().await?.is_empty() {
        return Ok(());
    }

    let values = [
        NewValue {
            title: "Safe".to_owned(),
            description: "Advanced safety protocols and real-time monitoring ensure your cargo \
                          is protected throughout the journey."
                .to_owned(),
            icon: "fas fa-shield-alt".to_owned(),
            order: 1,
        },
        NewValue {
            title: "Confidence".to_owned(),
            description: "Transparent communication and proven track record build lasting trust \
                          with our clients."
                .to_owned(),
            icon: "fas fa-handshake".to_owned(),
            order: 2,
        },
        NewValue {
            title: "Fast".to_owned(),
            description: "Optimized routes and efficient processes deliver your goods ahead of \
                          schedule."
                .to_owned(),
            icon: "fas fa-bolt".to_owned(),
            order: 3,
        },
        NewValue {
            title: "Reliability".to_owned(),
            description: "Consistent performance and backup systems ensure your shipments \
                          arrive as promised."
                .to_owned(),
            icon: "fas fa-award".to_owned(),
            order: 4,
        },
    ];

    for value in &values {
        repo.create(value).await?;
    }

    tracing::info!(count = values.len(), "seeded values");
    Ok(())
}

async fn seed_services(pool: &PgPool) -> Result<(), RepositoryError> {
    let repo = ServiceRepository::new(pool);
    if !repo.list().await?.is_empty() {
        return Ok(());
    }

    let services = [
        NewService {
            title: "Transportation of Trailers to and from Europe".to_owned(),
            description: "Comprehensive trailer transportation services connecting major \
                          European cities with optimized routes and professional drivers."
                .to_owned(),
            image_url: None,
            icon: "fas fa-truck".to_owned(),
            order: 1,
        },
        NewService {
            title: "IT Management of Fleets, Drivers, and Routes".to_owned(),
            description: "Advanced fleet management system providing real-time monitoring, \
                          route optimization, and driver performance analytics."
                .to_owned(),
            image_url: None,
            icon: "fas fa-cogs".to_owned(),
            order: 2,
        },
        NewService {
            title: "Tracking Services".to_owned(),
            description: "Real-time GPS tracking with detailed reporting, delivery \
                          notifications, and complete shipment visibility from pickup to \
                          delivery."
                .to_owned(),
            image_url: None,
            icon: "fas fa-map-marker-alt".to_owned(),
            order: 3,
        },
    ];

    for service in &services {
        repo.create(service).await?;
    }

    tracing::info!(count = services.len(), "seeded services");
    Ok(())
}

async fn seed_team(pool: &PgPool) -> Result<(), RepositoryError> {
    let repo = TeamMemberRepository::new(pool);
    if !repo.list().await?.is_empty() {
        return Ok(());
    }

    let members = [
        NewTeamMember {
            name: "Michael Rodriguez".to_owned(),
            role: "Co-founder".to_owned(),
            description: "15+ years in European logistics".to_owned(),
            image_url: None,
            order: 1,
        },
        NewTeamMember {
            name: "Sarah Thompson".to_owned(),
            role: "Co-founder".to_owned(),
            description: "Operations & Strategy Expert".to_owned(),
            image_url: None,
            order: 2,
        },
        NewTeamMember {
            name: "David Chen".to_owned(),
            role: "CTO".to_owned(),
            description: "Technology & Innovation Lead".to_owned(),
            image_url: None,
            order: 3,
        },
        NewTeamMember {
            name: "Elena Vasquez".to_owned(),
            role: "Finance Lead".to_owned(),
            description: "Financial Operations Manager".to_owned(),
            image_url: None,
            order: 4,
        },
    ];

    for member in &members {
        repo.create(member).await?;
    }

    tracing::info!(count = members.len(), "seeded team members");
    Ok(())
}

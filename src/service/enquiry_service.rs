use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::dto::enquiry_dto::{
    CreateEnquiryRequest, EnquiryListItem, EnquiryListQuery, UpdateEnquiryStatusRequest,
};
use crate::model::enquiry::{Enquiry, EnquiryStatus, EnquiryType};
use crate::model::package::Package;
use crate::model::transport::Transport;
use crate::repository::enquiry_repo::{EnquiryRepository, MongoEnquiryRepository};
use crate::repository::package_repo::{MongoPackageRepository, PackageRepository};
use crate::repository::transport_repo::{MongoTransportRepository, TransportRepository};
use crate::util::error::ServiceError;
use crate::util::export;

#[async_trait]
pub trait EnquiryService: Send + Sync {
    /// Storefront submission: stored PENDING regardless of input
    async fn submit(&self, request: CreateEnquiryRequest) -> Result<Enquiry, ServiceError>;
    /// Admin list with optional status and free-text filters; referenced
    /// packages and transports are resolved to their display names
    async fn list(&self, query: EnquiryListQuery) -> Result<Vec<EnquiryListItem>, ServiceError>;
    /// Same filters as `list`, rendered as CSV
    async fn export_csv(&self, query: EnquiryListQuery) -> Result<String, ServiceError>;
    /// Partial triage update of status and/or notes
    async fn update(
        &self,
        id: &str,
        request: UpdateEnquiryStatusRequest,
    ) -> Result<Enquiry, ServiceError>;
}

pub struct EnquiryServiceImpl {
    pub enquiry_repo: Arc<MongoEnquiryRepository>,
    pub package_repo: Arc<MongoPackageRepository>,
    pub transport_repo: Arc<MongoTransportRepository>,
}

impl EnquiryServiceImpl {
    pub fn new(
        enquiry_repo: Arc<MongoEnquiryRepository>,
        package_repo: Arc<MongoPackageRepository>,
        transport_repo: Arc<MongoTransportRepository>,
    ) -> Self {
        Self {
            enquiry_repo,
            package_repo,
            transport_repo,
        }
    }

    /// Attach the title/name of referenced records. Dangling references
    /// (record since deleted) simply resolve to nothing.
    fn resolve_references(
        enquiries: Vec<Enquiry>,
        packages: &[Package],
        transports: &[Transport],
    ) -> Vec<EnquiryListItem> {
        enquiries
            .into_iter()
            .map(|enquiry| {
                let package_title = enquiry.package_id.and_then(|id| {
                    packages
                        .iter()
                        .find(|p| p.id == Some(id))
                        .map(|p| p.title.clone())
                });
                let transport_name = enquiry.transport_id.and_then(|id| {
                    transports
                        .iter()
                        .find(|t| t.id == Some(id))
                        .map(|t| t.name.clone())
                });
                EnquiryListItem {
                    enquiry,
                    package_title,
                    transport_name,
                }
            })
            .collect()
    }

    /// `status=ALL` and a missing parameter both mean "no status filter"
    fn parse_status_filter(raw: Option<&str>) -> Result<Option<EnquiryStatus>, ServiceError> {
        match raw {
            None => Ok(None),
            Some(s) if s.eq_ignore_ascii_case("ALL") => Ok(None),
            Some(s) => EnquiryStatus::parse(s)
                .map(Some)
                .ok_or_else(|| ServiceError::InvalidInput(format!("Invalid status: {}", s))),
        }
    }

    async fn filtered(&self, query: &EnquiryListQuery) -> Result<Vec<Enquiry>, ServiceError> {
        let status = Self::parse_status_filter(query.status.as_deref())?;
        let all = self.enquiry_repo.list().await?;
        Ok(export::filter_enquiries(&all, status, query.q.as_deref()))
    }
}

#[async_trait]
impl EnquiryService for EnquiryServiceImpl {
    #[instrument(skip(self, request), fields(enquiry_type = %request.enquiry_type))]
    async fn submit(&self, request: CreateEnquiryRequest) -> Result<Enquiry, ServiceError> {
        info!("New enquiry submission");

        let enquiry_type = EnquiryType::parse(&request.enquiry_type).ok_or_else(|| {
            warn!("Rejected enquiry with unknown type: {}", request.enquiry_type);
            ServiceError::InvalidInput(format!("Invalid enquiry type: {}", request.enquiry_type))
        })?;

        let package_id = request
            .package_id
            .as_deref()
            .map(super::parse_object_id)
            .transpose()?;
        let transport_id = request
            .transport_id
            .as_deref()
            .map(super::parse_object_id)
            .transpose()?;

        let enquiry = Enquiry {
            id: None,
            enquiry_type,
            package_type: request.package_type,
            package_id,
            transport_id,
            pickup_location: request.pickup_location,
            drop_location: request.drop_location,
            destination: request.destination,
            duration: request.duration,
            people_count: request.people_count,
            travel_date: request.travel_date,
            customer_name: request.name,
            contact: request.phone,
            message: request.message.unwrap_or_default(),
            status: EnquiryStatus::Pending,
            notes: None,
            created_at: None,
            updated_at: None,
        };

        Ok(self.enquiry_repo.create(enquiry).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: EnquiryListQuery) -> Result<Vec<EnquiryListItem>, ServiceError> {
        let enquiries = self.filtered(&query).await?;
        let packages = self.package_repo.list(false).await?;
        let transports = self.transport_repo.list(false).await?;
        Ok(Self::resolve_references(enquiries, &packages, &transports))
    }

    #[instrument(skip(self))]
    async fn export_csv(&self, query: EnquiryListQuery) -> Result<String, ServiceError> {
        let rows = self.filtered(&query).await?;
        info!("Exporting {} enquiries as CSV", rows.len());
        Ok(export::enquiries_to_csv(&rows))
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update(
        &self,
        id: &str,
        request: UpdateEnquiryStatusRequest,
    ) -> Result<Enquiry, ServiceError> {
        let oid = super::parse_object_id(id)?;

        let status = request
            .status
            .as_deref()
            .map(|s| {
                EnquiryStatus::parse(s)
                    .ok_or_else(|| ServiceError::InvalidInput(format!("Invalid status: {}", s)))
            })
            .transpose()?;

        if status.is_none() && request.notes.is_none() {
            return Err(ServiceError::InvalidInput(
                "Nothing to update: provide status or notes".to_string(),
            ));
        }

        Ok(self
            .enquiry_repo
            .update_status(oid, status, request.notes)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_missing_both_disable_the_status_filter() {
        assert_eq!(EnquiryServiceImpl::parse_status_filter(None).unwrap(), None);
        assert_eq!(
            EnquiryServiceImpl::parse_status_filter(Some("ALL")).unwrap(),
            None
        );
        assert_eq!(
            EnquiryServiceImpl::parse_status_filter(Some("all")).unwrap(),
            None
        );
    }

    #[test]
    fn known_statuses_parse_and_unknown_is_rejected() {
        assert_eq!(
            EnquiryServiceImpl::parse_status_filter(Some("CONTACTED")).unwrap(),
            Some(EnquiryStatus::Contacted)
        );
        assert!(matches!(
            EnquiryServiceImpl::parse_status_filter(Some("ARCHIVED")),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    mod references {
        use super::*;
        use crate::model::package::PackageType;
        use bson::oid::ObjectId;

        fn enquiry(package_id: Option<ObjectId>, transport_id: Option<ObjectId>) -> Enquiry {
            Enquiry {
                id: Some(ObjectId::new()),
                enquiry_type: EnquiryType::Package,
                package_type: None,
                package_id,
                transport_id,
                pickup_location: None,
                drop_location: None,
                destination: None,
                duration: None,
                people_count: None,
                travel_date: None,
                customer_name: "Asha".to_string(),
                contact: "9847000001".to_string(),
                message: String::new(),
                status: EnquiryStatus::Pending,
                notes: None,
                created_at: None,
                updated_at: None,
            }
        }

        fn package(id: ObjectId, title: &str) -> Package {
            Package {
                id: Some(id),
                package_type: PackageType::Common,
                title: title.to_string(),
                destination: "Kochi".to_string(),
                duration: None,
                starting_price: 10000.0,
                min_people: None,
                description: None,
                itinerary: None,
                inclusions: None,
                exclusions: None,
                images: Vec::new(),
                offer_text: None,
                offer_percent: 0.0,
                is_active: true,
                created_at: None,
                updated_at: None,
            }
        }

        fn transport(id: ObjectId, name: &str) -> Transport {
            Transport {
                id: Some(id),
                name: name.to_string(),
                capacity: 12,
                price_per_km: 0.0,
                image: None,
                is_active: true,
                created_at: None,
                updated_at: None,
            }
        }

        #[test]
        fn referenced_records_resolve_to_their_names() {
            let pkg_id = ObjectId::new();
            let trans_id = ObjectId::new();
            let items = EnquiryServiceImpl::resolve_references(
                vec![enquiry(Some(pkg_id), Some(trans_id))],
                &[package(pkg_id, "Kerala Backwaters")],
                &[transport(trans_id, "Tempo Traveller")],
            );
            assert_eq!(items[0].package_title.as_deref(), Some("Kerala Backwaters"));
            assert_eq!(items[0].transport_name.as_deref(), Some("Tempo Traveller"));
        }

        #[test]
        fn dangling_or_absent_references_resolve_to_none() {
            let items = EnquiryServiceImpl::resolve_references(
                vec![
                    enquiry(Some(ObjectId::new()), None),
                    enquiry(None, Some(ObjectId::new())),
                ],
                &[],
                &[],
            );
            assert!(items[0].package_title.is_none());
            assert!(items[0].transport_name.is_none());
            assert!(items[1].package_title.is_none());
            assert!(items[1].transport_name.is_none());
        }
    }
}

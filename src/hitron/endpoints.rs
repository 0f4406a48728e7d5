use crate::domain::{
    CmDocsisProvision, CmDsInfo, CmDsOfdm, CmLog, CmSysInfo, CmUsInfo, CmUsOfdm, CmVersionInfo, Ddns, Dns, Hosts,
    RouterCapability, RouterDmz, RouterLocation, RouterPortForwardAll, RouterPortForwardStatus, RouterPortTriggerAll,
    RouterPortTriggerStatus, RouterSysInfo, RouterTr069, Time, UsersCsrf, WifiAccessControl, WifiAccessControlStatus,
    WifiClients, WifiGuestSsid, WifiRadio, WifiRadios, WifiRadiosAdvanced, WifiRadiosSurvey, WifiSsids, WifiWps,
};
use crate::hitron::client::{CableModem, HitronError};
use tracing::instrument;

/// Generates a method per read-only endpoint that fetches `path` and decodes it.
macro_rules! endpoints {
    ($($(#[$meta:meta])* $name:ident => $path:literal : $record:ty;)*) => {
        impl CableModem {
            $(
                $(#[$meta])*
                #[instrument(skip(self))]
                pub async fn $name(&self) -> Result<$record, HitronError> {
                    self.get($path).await
                }
            )*
        }
    };
}

endpoints! {
    /// DOCSIS provisioning progress
    cm_docsis_provision => "/CM/DocsisProvision": CmDocsisProvision;
    /// Downstream channels
    cm_ds_info => "/CM/DsInfo": CmDsInfo;
    /// Downstream OFDM receivers
    cm_ds_ofdm => "/CM/DsOfdm": CmDsOfdm;
    /// Cable modem event log
    cm_log => "/CM/Log": CmLog;
    cm_sys_info => "/CM/SysInfo": CmSysInfo;
    /// Upstream channels
    cm_us_info => "/CM/UsInfo": CmUsInfo;
    /// Upstream OFDMA channels
    cm_us_ofdm => "/CM/UsOfdm": CmUsOfdm;
    cm_version => "/CM/Version": CmVersionInfo;
    ddns => "/DDNS": Ddns;
    dns => "/DNS": Dns;
    /// Devices known on the LAN
    hosts => "/Hosts": Hosts;
    router_capability => "/Router/Capability": RouterCapability;
    router_dmz => "/Router/DMZ": RouterDmz;
    router_location => "/Router/Location": RouterLocation;
    router_port_forward_status => "/Router/PortForward/Status": RouterPortForwardStatus;
    router_port_forward_all => "/Router/PortForward/all": RouterPortForwardAll;
    router_port_trigger_status => "/Router/PortTrigger/Status": RouterPortTriggerStatus;
    router_port_trigger_all => "/Router/PortTrigger/all": RouterPortTriggerAll;
    router_sys_info => "/Router/SysInfo": RouterSysInfo;
    router_tr069 => "/Router/TR069": RouterTr069;
    time => "/Time": Time;
    users_csrf => "/Users/CSRF": UsersCsrf;
    wifi_access_control => "/WiFi/AccessControl": WifiAccessControl;
    wifi_access_control_status => "/WiFi/AccessControl/Status": WifiAccessControlStatus;
    /// Stations associated with the radios
    wifi_clients => "/WiFi/Client": WifiClients;
    wifi_guest_ssid => "/WiFi/GuestSSID": WifiGuestSsid;
    wifi_radios => "/WiFi/Radios": WifiRadios;
    wifi_radios_advanced => "/WiFi/Radios/Advanced": WifiRadiosAdvanced;
    /// Neighbouring networks
    wifi_radios_survey => "/WiFi/Radios/Survey": WifiRadiosSurvey;
    wifi_ssids => "/WiFi/SSIDs": WifiSsids;
    wifi_wps => "/WiFi/WPS": WifiWps;
}

impl CableModem {
    /// A single radio, `radio` is the number at the end of [`WifiRadio::radio_uri`].
    #[instrument(skip(self))]
    pub async fn wifi_radio_details(&self, radio: u32) -> Result<WifiRadio, HitronError> {
        self.get(&format!("/WiFi/Radios/{}", radio)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::app_config::AppConfigBuilder;
    use crate::domain::{MacAddress, Status, WifiMode};
    use crate::hitron::{CableModem, HitronError, new_client};
    use mockito::{Mock, Server};
    use pretty_assertions::assert_eq;
    use std::net::{IpAddr, Ipv4Addr};
    use test_log::test;

    async fn serve(server: &mut Server, path: &str, body: &str) -> Mock {
        server
            .mock("GET", format!("/1/Device{}", path).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    fn modem(server: &Server) -> Result<CableModem, HitronError> {
        new_client(&AppConfigBuilder::new().server_url(server.url()).build())
    }

    #[test(tokio::test)]
    async fn cm_ds_info_decodes_the_downstream_channels() -> Result<(), HitronError> {
        let mut server = Server::new_async().await;
        let mock = serve(&mut server, "/CM/DsInfo", include_str!("../../tests/resources/cm_ds_info.json")).await;

        let ds_info = modem(&server)?.cm_ds_info().await?;

        mock.assert_async().await;
        assert_eq!(ds_info.status, Status::success());
        assert_eq!(ds_info.ports.len(), 2);
        assert_eq!(ds_info.ports[0].frequency, 615000000);
        assert_eq!(ds_info.ports[1].modulation, "QAM256");

        Ok(())
    }

    #[test(tokio::test)]
    async fn cm_sys_info_decodes_the_wan_state() -> Result<(), HitronError> {
        let mut server = Server::new_async().await;
        let mock = serve(&mut server, "/CM/SysInfo", include_str!("../../tests/resources/cm_sys_info.json")).await;

        let sys_info = modem(&server)?.cm_sys_info().await?;

        mock.assert_async().await;
        assert_eq!(sys_info.ip, Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2))));
        assert_eq!(sys_info.mac_addr, Some(MacAddress::new([0x74, 0x9b, 0xde, 0xad, 0xbe, 0xf0])));

        Ok(())
    }

    #[test(tokio::test)]
    async fn router_sys_info_renders_like_the_device_ui() -> Result<(), HitronError> {
        let mut server = Server::new_async().await;
        let mock = serve(
            &mut server,
            "/Router/SysInfo",
            include_str!("../../tests/resources/router_sys_info.json"),
        )
        .await;

        let sys_info = modem(&server)?.router_sys_info().await?;

        mock.assert_async().await;
        let rendered = sys_info.to_string();
        assert!(rendered.contains("LAN: brlan0 (IP 192.168.0.1) (Net 192.168.0.0/24)\n"), "{rendered}");
        assert!(rendered.contains("\tRx/Tx Packets: 175,946,286/52,845,543\n"), "{rendered}");

        Ok(())
    }

    #[test(tokio::test)]
    async fn wifi_radio_details_fetches_a_single_radio() -> Result<(), HitronError> {
        let mut server = Server::new_async().await;
        let mock = serve(
            &mut server,
            "/WiFi/Radios/2",
            r#"{"errCode":"000","errMsg":"","band":"5G","wlsMode":"9","wlsChannel":149}"#,
        )
        .await;

        let radio = modem(&server)?.wifi_radio_details(2).await?;

        mock.assert_async().await;
        assert_eq!(radio.channel, 149);
        assert_eq!(radio.mode, WifiMode::A | WifiMode::N | WifiMode::AC);

        Ok(())
    }

    #[test(tokio::test)]
    async fn failed_statuses_are_returned_not_raised() -> Result<(), HitronError> {
        let mut server = Server::new_async().await;
        serve(&mut server, "/Router/Location", r#"{"errCode":"001","errMsg":"Session timeout"}"#).await;

        let location = modem(&server)?.router_location().await?;

        assert!(!location.status.is_success());
        assert_eq!(location.to_string(), "Error 001: Session timeout");

        Ok(())
    }

    #[test(tokio::test)]
    async fn wifi_clients_drop_entries_without_a_mac() -> Result<(), HitronError> {
        let mut server = Server::new_async().await;
        serve(&mut server, "/WiFi/Client", include_str!("../../tests/resources/wifi_clients.json")).await;

        let clients = modem(&server)?.wifi_clients().await?;

        assert_eq!(clients.clients.len(), 1);
        assert_eq!(clients.clients[0].hostname, "laptop");

        Ok(())
    }
}
